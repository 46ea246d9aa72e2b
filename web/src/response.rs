use axum::body::Body;
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use fixtures::FixtureStream;

use crate::pump;

pub const EVENT_STREAM_CONTENT_TYPE: &str = "text/event-stream;charset=utf-8";

/// Headers sent with every fixture response, rejections included.
pub const EVENT_STREAM_HEADERS: [(HeaderName, &str); 3] = [
    (header::CONTENT_TYPE, EVENT_STREAM_CONTENT_TYPE),
    (header::CACHE_CONTROL, "no-cache"),
    (header::CONNECTION, "keep-alive"),
];

/// Accepts the request and streams `source` as the response body.
pub fn event_stream(source: FixtureStream) -> Response {
    (
        StatusCode::OK,
        EVENT_STREAM_HEADERS,
        Body::from_stream(pump::spawn(source)),
    )
        .into_response()
}
