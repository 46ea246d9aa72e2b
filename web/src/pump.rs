//! Drains one fixture into one connection.
//!
//! The generator runs as its own task and hands chunks to the response body
//! through a single-slot channel. A slot is reserved before the next chunk is
//! pulled, so the generator never runs ahead of the transport by more than
//! the chunk currently being written. When hyper drops the body (client gone,
//! write failed) the channel closes, the task stops pulling, and dropping the
//! generator releases any timer it was waiting on.

use async_stream::stream;
use bytes::Bytes;
use fixtures::FixtureStream;
use futures::{Stream, StreamExt};
use log::*;
use std::convert::Infallible;
use tokio::sync::mpsc;

/// Starts draining `source` and returns the stream to use as a response body.
pub fn spawn(
    source: FixtureStream,
) -> impl Stream<Item = Result<Bytes, Infallible>> + Send + 'static {
    let (tx, mut rx) = mpsc::channel(1);
    tokio::spawn(drain(source, tx));

    stream! {
        while let Some(chunk) = rx.recv().await {
            yield Ok(chunk);
        }
    }
}

async fn drain(mut source: FixtureStream, sink: mpsc::Sender<Bytes>) {
    let mut written = 0usize;
    loop {
        let Ok(permit) = sink.reserve().await else {
            debug!("Client disconnected after {written} chunk(s), stopping fixture");
            return;
        };

        let next = tokio::select! {
            biased;
            () = sink.closed() => None,
            chunk = source.next() => Some(chunk),
        };

        match next {
            Some(Some(chunk)) => {
                permit.send(chunk);
                written += 1;
            }
            Some(None) => {
                trace!("Fixture exhausted after {written} chunk(s)");
                return;
            }
            None => {
                debug!("Client disconnected after {written} chunk(s), stopping fixture");
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::oneshot;

    struct DropSignal(Option<oneshot::Sender<()>>);

    impl Drop for DropSignal {
        fn drop(&mut self) {
            if let Some(tx) = self.0.take() {
                let _ = tx.send(());
            }
        }
    }

    #[tokio::test]
    async fn test_chunks_arrive_in_order_and_body_ends_with_the_source() {
        let chunks: Vec<Bytes> = (0..50).map(|i| Bytes::from(format!("{i},"))).collect();
        let expected: Vec<u8> = chunks.iter().flat_map(|c| c.to_vec()).collect();

        let body = Body::from_stream(spawn(futures::stream::iter(chunks).boxed()));
        let received = to_bytes(body, usize::MAX).await.unwrap();

        assert_eq!(&received[..], &expected[..]);
    }

    #[tokio::test]
    async fn test_chunk_boundaries_are_preserved() {
        let source = futures::stream::iter([
            Bytes::from_static(b"da"),
            Bytes::from_static(b"ta: 1\n"),
            Bytes::from_static(b"\n"),
        ])
        .boxed();

        let received: Vec<Bytes> = spawn(source).map(|chunk| chunk.unwrap()).collect().await;

        assert_eq!(
            received,
            [
                Bytes::from_static(b"da"),
                Bytes::from_static(b"ta: 1\n"),
                Bytes::from_static(b"\n")
            ]
        );
    }

    #[tokio::test]
    async fn test_generator_waits_for_the_previous_chunk_to_be_taken() {
        let pulled = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pulled);
        let source = futures::stream::iter(0..100)
            .map(move |i| {
                counter.fetch_add(1, Ordering::SeqCst);
                Bytes::from(i.to_string())
            })
            .boxed();

        let mut body = Box::pin(spawn(source));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(pulled.load(Ordering::SeqCst), 1);

        body.next().await.unwrap().unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(pulled.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_dropping_the_body_stops_the_generator_while_it_sleeps() {
        let (tx, rx) = oneshot::channel();
        let source = stream! {
            let _signal = DropSignal(Some(tx));
            yield Bytes::from_static(b"data: first\n\n");
            tokio::time::sleep(Duration::from_secs(3600)).await;
            yield Bytes::from_static(b"data: never\n\n");
        }
        .boxed();

        let mut body = Box::pin(spawn(source));
        assert_eq!(
            body.next().await.unwrap().unwrap(),
            Bytes::from_static(b"data: first\n\n")
        );
        drop(body);

        tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .expect("generator should be dropped once the client is gone")
            .unwrap();
    }
}
