//! Field name and field value parsing edge cases.

use crate::format::{format_event, Event};
use crate::{done, FixtureStream};
use bytes::Bytes;
use futures::StreamExt;

fn fixed(chunks: Vec<Bytes>) -> FixtureStream {
    futures::stream::iter(chunks).boxed()
}

/// Empty `event:` fields, with and without data.
pub fn empty_events() -> FixtureStream {
    fixed(vec![
        Bytes::from_static(b"event:\ndata: Hello 1\n\n"),
        Bytes::from_static(b"event:\n\n"),
        done(),
    ])
}

/// A three step reconnection script. Each connection writes one event and
/// closes; the step is chosen by the client's last event id.
///
/// - none or `0`: id `1` with a 500ms retry
/// - `1`: id `2` with an empty `retry:` field, which must not reset the delay
/// - anything else: id `3`
pub fn empty_retry(last_event_id: Option<i64>) -> FixtureStream {
    let chunk = match last_event_id {
        None | Some(0) => format_event(Event::new("🥌").id("1").retry(500)),
        Some(1) => "id:2\nretry:\ndata:🧹\n\n".to_string(),
        Some(_) => format_event(Event::new("✅").id("3")),
    };
    fixed(vec![Bytes::from(chunk)])
}

/// NUL bytes, misspelt and miscased field names, and leading spaces.
pub fn field_parsing() -> FixtureStream {
    fixed(vec![
        Bytes::from_static(
            b"data:\0\ndata:  2\rData:1\ndata\0:2\ndata:1\r\0data:4\nda-ta:3\rdata_5\ndata:3\rdata\ndata:\r\n data:32\ndata:4\n\n",
        ),
        done(),
    ])
}

/// `data` fields with no colon, no value, or both.
pub fn data_field_parsing() -> FixtureStream {
    fixed(vec![
        Bytes::from_static(b"data:\n\ndata\ndata\n\ndata:test\n\n"),
        done(),
    ])
}

/// A valid `retry` followed by one with trailing garbage, which must be ignored.
pub fn invalid_retry() -> FixtureStream {
    fixed(vec![Bytes::from_static(b"retry:1000\nretry:2000x\ndata:x\n\n")])
}

/// Unrecognized fields, bare words and comments inside one frame.
pub fn unknown_fields() -> FixtureStream {
    fixed(vec![
        Bytes::from_static(
            b"data:test\n data\ndata\nfoobar:xxx\njustsometext\n:thisisacommentyay\ndata:test\n\n",
        ),
        done(),
    ])
}
