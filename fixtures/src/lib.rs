//! Fixture streams for exercising Server-Sent Events clients.
//!
//! Every fixture is a factory returning a fresh [`FixtureStream`]: a lazy,
//! finite, time-paced sequence of byte chunks. Chunk boundaries are part of
//! the fixture. A chunk may end halfway through a line, a field, or even a
//! UTF-8 sequence, and whatever transports the stream must forward each chunk
//! as produced without coalescing or re-buffering.
//!
//! # Pacing
//!
//! Generators suspend only at their delay points ([`TICK`] for ordinary
//! scenarios, [`FINE_TICK`] for fine-grained ones). Nothing is produced until
//! the stream is polled, so a slow consumer stalls the generator's own clock
//! and nothing else.
//!
//! # Modules
//!
//! - `format`: wire serialization of events and comments
//! - `multibyte`: the non-ASCII corpus shared by several fixtures
//! - `sequence`: paced event sequences (`/basic`, `/time`, `/identified`, ...)
//! - `encoding`: byte-level edge cases (split code points, BOMs, line endings)
//! - `comments`: comment lines interleaved with frames
//! - `fields`: field-name and field-value parsing edge cases
//! - `volume`: the ten megabyte integrity scenario
//! - `headers`: echo of the request headers

use bytes::Bytes;
use futures::stream::BoxStream;
use std::time::Duration;

pub mod comments;
pub mod encoding;
pub mod fields;
pub mod format;
pub mod headers;
pub mod multibyte;
pub mod sequence;
pub mod volume;

pub use comments::{comments, comments_mixed};
pub use encoding::{
    bom, carriage_return, carriage_return_line_feed, line_feed, multibyte, multibyte_empty_line,
};
pub use fields::{
    data_field_parsing, empty_events, empty_retry, field_parsing, invalid_retry, unknown_fields,
};
pub use headers::headers;
pub use sequence::{basic, heartbeats, identified, multiline, silence, time};
pub use volume::huge_message;

/// An ordered, lazy, finite sequence of wire chunks for one connection.
pub type FixtureStream = BoxStream<'static, Bytes>;

/// Delay between logical ticks of a scenario.
pub const TICK: Duration = Duration::from_millis(250);

/// Delay used where a client must reassemble many small writes.
pub const FINE_TICK: Duration = Duration::from_millis(50);

/// The frame every completed scenario ends with.
pub(crate) fn done() -> Bytes {
    done_with("✔")
}

pub(crate) fn done_with(data: &str) -> Bytes {
    Bytes::from(format::format_event(format::Event::new(data).event("done")))
}
