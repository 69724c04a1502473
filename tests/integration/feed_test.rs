//! Integration tests for the prediction feed

use prediction_board::config::FeedConfig;
use prediction_board::feed::{FeedError, FeedState, HttpFeed, PredictionFeed};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned HTTP response and return the feed URL
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}/predictions", addr)
}

fn feed(url: String) -> HttpFeed {
    HttpFeed::new(FeedConfig {
        url,
        timeout_secs: Some(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_http_feed_fetches_records() {
    let url = serve_once(
        "200 OK",
        r#"[{"Date": "2024-01-01", "Time": "09:30:00", "Predicted_Time": "2024-01-01 09:30:00",
             "Actual_Time": "Pending", "Stock": "AAPL", "Predicted_Close": 150.0,
             "Predicted_Close_GBP": 117.0, "Actual_Close": "Pending",
             "Actual_Close_GBP": "Pending", "Correct": "Pending"}]"#,
    )
    .await;

    let snapshot = feed(url).fetch_all().await.unwrap();
    assert_eq!(snapshot.records.len(), 1);
    assert_eq!(snapshot.records[0].symbol, "AAPL");
    assert!(snapshot.records[0].is_pending());
}

#[tokio::test]
async fn test_http_feed_empty_array_is_ready() {
    let url = serve_once("200 OK", "[]").await;

    let state = FeedState::load(&feed(url)).await;
    let snapshot = state.snapshot().expect("empty array is a valid snapshot");
    assert!(snapshot.is_empty());
}

#[tokio::test]
async fn test_http_feed_not_found_is_failure() {
    let url = serve_once("404 Not Found", r#"{"error": "No predictions available"}"#).await;

    let result = feed(url).fetch_all().await;
    match result {
        Err(FeedError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("No predictions available"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_feed_unreachable_is_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = FeedState::load(&feed(format!("http://{}/predictions", addr))).await;
    assert!(matches!(state, FeedState::Failed(FeedError::Transport(_))));
}
