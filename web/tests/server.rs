use futures::StreamExt;
use reqwest::{header, Client, StatusCode};
use service::{config::Config, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;

const BASIC_BODY: &str =
    "data: 0\n\ndata: 1\n\ndata: 2\n\ndata: 3\n\ndata: 4\n\nevent: done\ndata: ✔\n\n";

async fn start_server() -> SocketAddr {
    let config = Config::from_args(["sse_fixture_server", "--static-dir", "does-not-exist"]);
    let app = web::define_routes(AppState::new(config));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(web::serve(listener, app, std::future::pending()));
    addr
}

#[tokio::test]
async fn test_basic_is_streamed_chunk_by_chunk_over_tcp() {
    let addr = start_server().await;

    let response = Client::new()
        .get(format!("http://{addr}/basic"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/event-stream;charset=utf-8"
    );
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");

    let mut chunks = response.bytes_stream();
    let first = chunks.next().await.unwrap().unwrap();
    assert_eq!(&first[..], b"data: 0\n\n");

    let mut body = first.to_vec();
    while let Some(chunk) = chunks.next().await {
        body.extend_from_slice(&chunk.unwrap());
    }
    assert_eq!(String::from_utf8(body).unwrap(), BASIC_BODY);
}

#[tokio::test]
async fn test_invalid_last_event_id_gets_status_250_over_tcp() {
    let addr = start_server().await;

    let response = Client::new()
        .get(format!("http://{addr}/lf"))
        .header("Last-Event-ID", "nope")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 250);
    assert_eq!(
        response.text().await.unwrap(),
        "event: error\ndata: Invalid `Last-Event-ID` header\n\n"
    );
}

#[tokio::test]
async fn test_concurrent_connections_never_interleave() {
    let addr = start_server().await;
    let client = Client::new();

    let requests = (0..4).map(|_| {
        let client = client.clone();
        async move {
            client
                .get(format!("http://{addr}/basic"))
                .send()
                .await
                .unwrap()
                .text()
                .await
                .unwrap()
        }
    });

    for body in futures::future::join_all(requests).await {
        assert_eq!(body, BASIC_BODY);
    }
}

#[tokio::test]
async fn test_split_code_points_survive_the_transport() {
    let addr = start_server().await;

    let body = Client::new()
        .get(format!("http://{addr}/multibyte"))
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();

    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.contains("data:我現在都看實況不玩遊戲 "));
    assert!(text.ends_with("event: done\ndata: ✔\n\n"));
}
