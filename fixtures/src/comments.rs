//! Comment lines before, between and inside frames.

use crate::multibyte::EMOJIS;
use crate::{done, FixtureStream, FINE_TICK, TICK};
use async_stream::stream;
use bytes::Bytes;
use futures::StreamExt;
use tokio::time::sleep;

/// Comments in all positions, several written in pieces across chunks, around
/// the events `First`..`Fifth`.
pub fn comments() -> FixtureStream {
    stream! {
        yield Bytes::from_static(b": Hello\n\n");
        yield Bytes::from(":".repeat(300));
        yield Bytes::from_static(b"\n");
        sleep(TICK).await;

        yield Bytes::from_static(b"data: First\n\n");
        yield Bytes::from(": Первый");
        sleep(TICK).await;

        // Continues the comment line left open by the previous tick.
        yield Bytes::from(": 第二");
        yield Bytes::from_static(b"\n");
        yield Bytes::from_static(b"data: Second\n\n");
        sleep(TICK).await;

        for _ in 0..10 {
            yield Bytes::from_static(b": Moop \n");
        }
        yield Bytes::from(": ثالث");
        yield Bytes::from_static(b"\n");
        yield Bytes::from_static(b"data: Third\n\n");
        sleep(TICK).await;

        yield Bytes::from(":നാലാമത്തെ");
        yield Bytes::from_static(b"\n");
        yield Bytes::from_static(b"data: Fourth\n\n");
        sleep(TICK).await;

        yield Bytes::from(format!(": {} :", EMOJIS[..100].join(" ")));
        yield Bytes::from_static(b"\n");
        yield Bytes::from_static(b"data: Fifth\n\n");

        yield done();
    }
    .boxed()
}

/// Length of the comment that straddles several writes; one past a common
/// 2 KiB read buffer.
const LONG_COMMENT_LEN: usize = 2 * 1024 + 1;

/// Comments mixed with every line terminator, NUL bytes and comments longer
/// than a typical read buffer. Ends with an unterminated `data:5` that a
/// conformant parser never dispatches.
pub fn comments_mixed() -> FixtureStream {
    stream! {
        let long = Bytes::from("x".repeat(LONG_COMMENT_LEN));

        yield Bytes::from_static(b"data:1\r\r:\0\n:\r\ndata:2\n\n:");
        sleep(FINE_TICK).await;

        yield long.clone();
        sleep(FINE_TICK).await;

        yield Bytes::from_static(b"\rdata:3\n\n:data:fail\r:");
        yield long;
        sleep(FINE_TICK).await;

        yield Bytes::from_static(b"\ndata:4\n\n");
        sleep(TICK).await;

        yield Bytes::from_static(b"data:5");
        sleep(TICK).await;
    }
    .boxed()
}
