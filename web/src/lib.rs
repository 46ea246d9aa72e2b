//! HTTP surface of the fixture server.
//!
//! A request passes through three stages:
//!
//! 1. `server`: the accepted socket is configured for streaming.
//! 2. `extractors::last_event_id`: the `Last-Event-ID` header is validated.
//!    Malformed values are answered with status 250 and a single error event;
//!    the fixture is never started.
//! 3. `router`/`controller`: exactly one fixture is selected by path and its
//!    stream handed to the `pump`, which drains it into the response body.

pub use service::AppState;

mod controller;
pub mod error;
mod extractors;
pub mod pump;
pub mod response;
pub mod router;
pub mod server;

pub use error::{Error, Result};
pub use router::define_routes;
pub use server::{serve, shutdown_signal};
