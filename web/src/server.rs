//! The accept loop.
//!
//! Each accepted socket is tuned for long-lived, low-latency streaming before
//! hyper sees it: Nagle's algorithm is disabled so every small chunk leaves
//! immediately, and TCP keep-alive probing is enabled. No read, header or
//! idle timeout is configured; silent fixtures hold connections open on
//! purpose.

use axum::extract::Request;
use axum::Router;
use hyper::body::Incoming;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder;
use log::*;
use socket2::SockRef;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tower::ServiceExt;

/// Pause after an accept error, which is usually fd exhaustion.
const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_secs(1);

/// Serves `app` on `listener` until `shutdown` resolves. Connections are
/// independent tasks; one failing never affects another.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F)
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        let accepted = tokio::select! {
            accepted = listener.accept() => accepted,
            () = &mut shutdown => {
                info!("Shutting down, no longer accepting connections");
                return;
            }
        };

        let (stream, remote_addr) = match accepted {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Failed to accept connection: {e}");
                tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                continue;
            }
        };

        if let Err(e) = configure_stream(&stream) {
            warn!("Failed to configure socket for {remote_addr}: {e}");
        }
        trace!("Accepted connection from {remote_addr}");

        let tower_service = app.clone();
        tokio::spawn(async move {
            let hyper_service = hyper::service::service_fn(move |request: Request<Incoming>| {
                tower_service.clone().oneshot(request)
            });

            let mut builder = Builder::new(TokioExecutor::new());
            builder.http1().keep_alive(true);

            if let Err(e) = builder
                .serve_connection(TokioIo::new(stream), hyper_service)
                .await
            {
                debug!("Connection from {remote_addr} ended: {e}");
            }
        });
    }
}

fn configure_stream(stream: &TcpStream) -> io::Result<()> {
    stream.set_nodelay(true)?;
    SockRef::from(stream).set_keepalive(true)?;
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for the shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
