//! Handlers for the fixtures that need something from the request.
//! Parameterless fixtures are wired straight from the router.

use axum::http::HeaderMap;
use axum::response::Response;
use fixtures::sequence::resume_after;
use log::*;

use crate::extractors::last_event_id::LastEventId;
use crate::response::event_stream;
use crate::{Error, Result};

/// GET /identified. Resumes the tick sequence after the client's last id and
/// rejects ids past the last resumable one.
pub(crate) async fn identified(LastEventId(last_event_id): LastEventId) -> Result<Response> {
    let start = resume_after(last_event_id).ok_or_else(|| {
        warn!("Last-Event-ID {last_event_id:?} is past the last resumable tick");
        Error::last_event_id_out_of_range()
    })?;
    debug!("Streaming identified ticks from id {start}");

    Ok(event_stream(fixtures::identified(start)))
}

/// GET /empty-retry
pub(crate) async fn empty_retry(LastEventId(last_event_id): LastEventId) -> Response {
    event_stream(fixtures::empty_retry(last_event_id))
}

/// ANY /headers. Echoes the request headers back as JSON.
pub(crate) async fn headers(_: LastEventId, headers: HeaderMap) -> Response {
    let echoed = headers
        .iter()
        .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value.as_bytes())));
    event_stream(fixtures::headers(echoed))
}
