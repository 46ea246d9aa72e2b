use std::error::Error as StdError;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fixtures::format::{format_event, Event};

use crate::response::EVENT_STREAM_HEADERS;

pub type Result<T> = core::result::Result<T, Error>;

/// Success-range status for a structurally invalid `Last-Event-ID`. Clients
/// under test must cope with an event stream that is not a plain 200.
pub const INVALID_LAST_EVENT_ID_STATUS: u16 = 250;

/// The only failures a client ever sees. Transport faults are not reported:
/// there is no one left to report them to.
#[derive(Debug)]
pub struct Error {
    pub error_kind: ErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// The header is present and non-empty but has no leading integer.
    InvalidLastEventId,
    /// The header parsed, but the scenario has nothing after that id.
    LastEventIdOutOfRange,
}

impl Error {
    pub fn invalid_last_event_id() -> Self {
        Self {
            error_kind: ErrorKind::InvalidLastEventId,
        }
    }

    pub fn last_event_id_out_of_range() -> Self {
        Self {
            error_kind: ErrorKind::LastEventIdOutOfRange,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.error_kind {
            ErrorKind::InvalidLastEventId => {
                StatusCode::from_u16(INVALID_LAST_EVENT_ID_STATUS).unwrap_or(StatusCode::OK)
            }
            ErrorKind::LastEventIdOutOfRange => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> &'static str {
        match self.error_kind {
            ErrorKind::InvalidLastEventId => "Invalid `Last-Event-ID` header",
            ErrorKind::LastEventIdOutOfRange => "Last event ID out of range",
        }
    }
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

// The whole body is a single `error` event so the rejection still reads as an
// event stream.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let frame = format_event(Event::new(self.message()).event("error"));
        (self.status(), EVENT_STREAM_HEADERS, frame).into_response()
    }
}
