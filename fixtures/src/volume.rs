//! End-to-end transport fidelity: ten megabytes of multibyte data followed by
//! the digest of every byte written.

use crate::format::{encode_data, format_comment};
use crate::multibyte::{EMOJIS, LINES};
use crate::{done_with, FixtureStream};
use async_stream::stream;
use bytes::Bytes;
use futures::StreamExt;
use md5::{Digest, Md5};
use std::sync::OnceLock;
use std::time::Duration;
use tokio::time::sleep;

pub const TEN_MEGABYTES: usize = 10 * 1024 * 1024;

/// Target duration of the whole transfer.
const TRANSFER_TIME: Duration = Duration::from_secs(5);

/// The chunk repeated by [`huge_message`]: the corpus encoded as `data:`
/// lines, without a trailing line terminator. Built once and shared, since
/// `Bytes` clones are reference counted.
pub fn volume_chunk() -> Bytes {
    static CHUNK: OnceLock<Bytes> = OnceLock::new();
    CHUNK
        .get_or_init(|| {
            let text = format!("{}\n{}", LINES.join("\n\n"), EMOJIS.join(" "));
            Bytes::from(encode_data(&text).trim_end().to_string())
        })
        .clone()
}

/// Delay between chunks so that the full payload takes about
/// [`TRANSFER_TIME`] to send.
fn chunk_wait(chunk_len: usize) -> Duration {
    let chunks = TEN_MEGABYTES.div_ceil(chunk_len.max(1)).max(1);
    TRANSFER_TIME / u32::try_from(chunks).unwrap_or(u32::MAX)
}

/// A greeting comment, then the volume chunk repeated back to back until at
/// least [`TEN_MEGABYTES`] were written, terminated by a blank line. An
/// end-of-stream comment follows, and finally `done` carrying the lowercase
/// hex MD5 of all volume chunks as written.
pub fn huge_message() -> FixtureStream {
    stream! {
        yield Bytes::from(format_comment(" hello") + "\n");

        let chunk = volume_chunk();
        let wait = chunk_wait(chunk.len());
        let mut hasher = Md5::new();
        let mut written = 0;
        while written < TEN_MEGABYTES {
            hasher.update(&chunk);
            yield chunk.clone();
            written += chunk.len();
            sleep(wait).await;
        }

        yield Bytes::from_static(b"\n\n");
        yield Bytes::from(format_comment(" END-OF-STREAM") + "\n");
        yield done_with(&hex::encode(hasher.finalize()));
    }
    .boxed()
}
