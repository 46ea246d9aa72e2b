//! Paced sequences of well-formed events.

use crate::format::{format_comment, format_event, Event};
use crate::{done, FixtureStream, TICK};
use async_stream::stream;
use bytes::Bytes;
use chrono::{SecondsFormat, Utc};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::sleep;

/// Last-event ids from this one on are out of range for the identified sequence.
pub const MAX_RESUME_ID: i64 = 6;

/// Connections starting at or after this id end with `done`.
pub const FINAL_START_ID: i64 = 4;

const TICKS_PER_CONNECTION: i64 = 2;
const TICK_RETRY_MILLIS: u64 = 50;

/// How long the silent fixture holds the connection open.
pub const SILENCE: Duration = Duration::from_millis(2500);

/// Five data-only events `0`..`4`, then `done`.
pub fn basic() -> FixtureStream {
    stream! {
        for i in 0..5 {
            yield Bytes::from(format_event(i.to_string()));
            sleep(TICK).await;
        }
        yield done();
    }
    .boxed()
}

/// Five `time` events carrying the server clock, then `done`.
pub fn time() -> FixtureStream {
    stream! {
        for _ in 0..5 {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            yield Bytes::from(format_event(Event::new(now).event("time")));
            sleep(TICK).await;
        }
        yield done();
    }
    .boxed()
}

/// Returns the first tick id to emit for a client that last saw
/// `last_event_id`, or `None` when that id is [`MAX_RESUME_ID`] or later.
///
/// Negative ids resume from the start.
pub fn resume_after(last_event_id: Option<i64>) -> Option<i64> {
    match last_event_id {
        None => Some(0),
        Some(id) if id >= MAX_RESUME_ID => None,
        Some(id) => Some(id.max(-1) + 1),
    }
}

/// Two `tick` events starting at `start`, each carrying its id and a short
/// reconnection delay so clients reconnect quickly. Connections starting at
/// [`FINAL_START_ID`] or later also emit `done`.
pub fn identified(start: i64) -> FixtureStream {
    let end = start.saturating_add(TICKS_PER_CONNECTION);
    stream! {
        for id in start..end {
            let tick = Event::new(id.to_string())
                .event("tick")
                .id(id.to_string())
                .retry(TICK_RETRY_MILLIS);
            yield Bytes::from(format_event(tick));
            sleep(TICK).await;
        }
        if start >= FINAL_START_ID {
            yield done();
        }
    }
    .boxed()
}

/// A heartbeat comment before each of the events `A`..`E`, then `done`.
pub fn heartbeats() -> FixtureStream {
    stream! {
        for letter in 'A'..='E' {
            yield Bytes::from(format_comment(" ♥"));
            yield Bytes::from(format_event(letter.to_string()));
            sleep(TICK).await;
        }
        yield done();
    }
    .boxed()
}

/// Holds the connection open without writing anything.
pub fn silence() -> FixtureStream {
    futures::stream::once(sleep(SILENCE))
        .filter_map(|()| async { None })
        .boxed()
}

/// Two events whose data spans three separately written `data:` lines.
pub fn multiline() -> FixtureStream {
    stream! {
        yield Bytes::from_static(b"event: stock\n");
        yield Bytes::from_static(b"data: YHOO\n");
        yield Bytes::from_static(b"data: +2\n");
        yield Bytes::from_static(b"data: 10\n\n");

        sleep(TICK).await;

        yield Bytes::from_static(b"event: stock\n");
        yield Bytes::from_static(b"data: GOOG\n");
        yield Bytes::from_static(b"data: -8\n");
        yield Bytes::from_static(b"data: 1881\n\n");

        yield done();
    }
    .boxed()
}
