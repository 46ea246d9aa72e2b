//! Byte-level edge cases: code points split across writes, byte order marks
//! and every line terminator convention.

use crate::multibyte::{EMOJIS, LINES};
use crate::{done, FixtureStream, FINE_TICK};
use async_stream::stream;
use bytes::Bytes;
use futures::StreamExt;
use tokio::time::sleep;

const DATA_PREFIX: &str = "data:";

/// One identified event per corpus line, each carrying its share of the
/// emoji list. Even lines are written in two chunks whose boundary falls
/// inside a multibyte UTF-8 sequence.
pub fn multibyte() -> FixtureStream {
    let per_line = EMOJIS.len().div_ceil(LINES.len());
    stream! {
        for (i, line) in LINES.iter().enumerate() {
            let start = (per_line * i).min(EMOJIS.len());
            let end = (start + per_line).min(EMOJIS.len());
            let payload = format!("{line} {}", EMOJIS[start..end].join(" "));

            yield Bytes::from(format!("id: {i}\n"));
            if i % 2 == 0 {
                let (head, tail) = split_inside_code_point(&payload);
                yield head;
                yield tail;
            } else {
                yield Bytes::from(format!("{DATA_PREFIX}{payload}\n\n"));
            }
            sleep(FINE_TICK).await;
        }
        yield done();
    }
    .boxed()
}

/// Splits `data:<payload>\n\n` one byte into the first multibyte code point
/// of `payload`. Falls back to a split after five payload bytes for ASCII.
fn split_inside_code_point(payload: &str) -> (Bytes, Bytes) {
    let frame = Bytes::from(format!("{DATA_PREFIX}{payload}\n\n"));
    let offset = (1..payload.len())
        .find(|&i| !payload.is_char_boundary(i))
        .unwrap_or(payload.len().min(5));
    let at = DATA_PREFIX.len() + offset;
    (frame.slice(..at), frame.slice(at..))
}

/// Blank lines before the first field of the stream.
pub fn multibyte_empty_line() -> FixtureStream {
    futures::stream::iter([
        Bytes::from("\n\n\n\nid: 1\ndata: 我現在都看實況不玩遊戲\n\n"),
        done(),
    ])
    .boxed()
}

/// A byte order mark before the first frame, another before the second one,
/// which must be treated as part of the field name, and a clean third frame.
pub fn bom() -> FixtureStream {
    futures::stream::iter([
        Bytes::from("\u{FEFF}data: bomful 1\n\n"),
        Bytes::from("\u{FEFF}data: bomful 2\n\n"),
        Bytes::from_static(b"data: bomless 3\n\n"),
        done(),
    ])
    .boxed()
}

/// Two-line events terminated by CR only.
pub fn carriage_return() -> FixtureStream {
    line_terminated(&[("dog", "bark"), ("cat", "meow")], "\r")
}

/// Two-line events terminated by LF only.
pub fn line_feed() -> FixtureStream {
    line_terminated(&[("cow", "moo"), ("horse", "neigh")], "\n")
}

/// Two-line events terminated by CRLF.
pub fn carriage_return_line_feed() -> FixtureStream {
    line_terminated(&[("sheep", "bleat"), ("pig", "oink")], "\r\n")
}

fn line_terminated(events: &[(&str, &str); 2], eol: &str) -> FixtureStream {
    let mut chunks = Vec::with_capacity(events.len() * 2 + 1);
    for (first, second) in events {
        chunks.push(Bytes::from(format!("data: {first}{eol}")));
        chunks.push(Bytes::from(format!("data: {second}{eol}{eol}")));
    }
    chunks.push(done());
    futures::stream::iter(chunks).boxed()
}
