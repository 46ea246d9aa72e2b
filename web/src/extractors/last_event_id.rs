use crate::{Error, Result};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderName, HeaderValue},
};
use log::*;

pub(crate) static LAST_EVENT_ID: HeaderName = HeaderName::from_static("last-event-id");

/// The client's resumption token. Every fixture route takes this extractor,
/// so a malformed `Last-Event-ID` is rejected before any generator runs.
pub(crate) struct LastEventId(pub Option<i64>);

#[async_trait]
impl<S> FromRequestParts<S> for LastEventId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        let header = parts.headers.get(&LAST_EVENT_ID);
        match parse_last_event_id(header) {
            Ok(last_event_id) => {
                trace!("{} resuming after {:?}", parts.uri.path(), last_event_id);
                Ok(LastEventId(last_event_id))
            }
            Err(e) => {
                warn!("Rejecting {} with Last-Event-ID {:?}", parts.uri.path(), header);
                Err(e)
            }
        }
    }
}

/// An absent or empty header means no token. Otherwise the value must start
/// with an integer; anything after the digits is ignored, so `"3abc"` is 3.
pub(crate) fn parse_last_event_id(header: Option<&HeaderValue>) -> Result<Option<i64>> {
    let Some(header) = header else {
        return Ok(None);
    };
    if header.is_empty() {
        return Ok(None);
    }

    let value = String::from_utf8_lossy(header.as_bytes());
    parse_leading_integer(&value)
        .map(Some)
        .ok_or_else(Error::invalid_last_event_id)
}

/// Reads an optionally signed run of decimal digits after leading whitespace.
/// Values beyond the range of `i64` saturate.
fn parse_leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits: Vec<i64> = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|digit| i64::from(digit - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, digit| acc.saturating_mul(10).saturating_add(digit));
    Some(if negative { -magnitude } else { magnitude })
}
