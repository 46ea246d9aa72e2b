use crate::controller::fixture_controller;
use crate::extractors::last_event_id::LastEventId;
use crate::response::event_stream;
use crate::AppState;
use axum::{
    routing::{any, get, MethodRouter},
    Router,
};
use fixtures::FixtureStream;
use tower_http::services::ServeDir;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(sequence_routes())
        .merge(encoding_routes())
        .merge(comment_routes())
        .merge(field_routes())
        .route("/huge-message", fixture(fixtures::huge_message))
        .route("/headers", any(fixture_controller::headers))
        .fallback_service(static_routes(&app_state))
}

/// A GET route streaming a fixture that takes no input. The Last-Event-ID
/// header is still validated.
fn fixture(generator: fn() -> FixtureStream) -> MethodRouter {
    get(move |_: LastEventId| async move { event_stream(generator()) })
}

fn sequence_routes() -> Router {
    Router::new()
        .route("/basic", fixture(fixtures::basic))
        .route("/time", fixture(fixtures::time))
        .route("/identified", get(fixture_controller::identified))
        .route("/heartbeats", fixture(fixtures::heartbeats))
        .route("/silence", fixture(fixtures::silence))
        .route("/multiline", fixture(fixtures::multiline))
}

fn encoding_routes() -> Router {
    Router::new()
        .route("/multibyte", fixture(fixtures::multibyte))
        .route("/multibyte-empty-line", fixture(fixtures::multibyte_empty_line))
        .route("/bom", fixture(fixtures::bom))
        .route("/cr", fixture(fixtures::carriage_return))
        .route("/lf", fixture(fixtures::line_feed))
        .route("/crlf", fixture(fixtures::carriage_return_line_feed))
}

fn comment_routes() -> Router {
    Router::new()
        .route("/comments", fixture(fixtures::comments))
        .route("/comments-mixed", fixture(fixtures::comments_mixed))
}

fn field_routes() -> Router {
    Router::new()
        .route("/empty-events", fixture(fixtures::empty_events))
        .route("/empty-retry", get(fixture_controller::empty_retry))
        .route("/field-parsing", fixture(fixtures::field_parsing))
        .route("/data-field-parsing", fixture(fixtures::data_field_parsing))
        .route("/invalid-retry", fixture(fixtures::invalid_retry))
        .route("/unknown-fields", fixture(fixtures::unknown_fields))
}

// Demo pages and client bundles live next to the fixtures.
pub fn static_routes(app_state: &AppState) -> ServeDir {
    ServeDir::new(app_state.static_dir())
}
