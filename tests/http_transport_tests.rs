//! Error mapping of the reqwest-backed transport against a local mock server.

use std::time::Duration;

use serde_json::json;
use telescopes::api::{set_silent, HttpGet, HttpTransport, PricingError};
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;

fn transport(timeout: Duration) -> HttpTransport {
    set_silent(true);
    HttpTransport::new(timeout).unwrap()
}

#[tokio::test]
async fn test_json_body_is_returned() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/regions/ec2")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"eu-west-1","name":"EU West"}]"#)
        .create_async()
        .await;

    let url = format!("{}/api/v1/regions/ec2", server.url());
    let value = transport(Duration::from_secs(5)).get(&url).await.unwrap();

    assert_eq!(value, json!([{"id": "eu-west-1", "name": "EU West"}]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_network_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/products/ec2/eu-west-1")
        .with_status(503)
        .with_body(r#"{"message":"scraping in progress"}"#)
        .create_async()
        .await;

    let url = format!("{}/api/v1/products/ec2/eu-west-1", server.url());
    let err = transport(Duration::from_secs(5)).get(&url).await.unwrap_err();

    match err {
        PricingError::Network(msg) => assert!(msg.contains("HTTP 503"), "got {}", msg),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_html_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/regions/ec2")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html><body>maintenance</body></html>")
        .create_async()
        .await;

    let url = format!("{}/api/v1/regions/ec2", server.url());
    let err = transport(Duration::from_secs(5)).get(&url).await.unwrap_err();

    match err {
        PricingError::Decode(msg) => assert!(msg.contains("is not JSON"), "got {}", msg),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    // Accepts the connection and never answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            tokio::time::sleep(Duration::from_secs(5)).await;
        }
    });

    let url = format!("http://{}/api/v1/regions/ec2", addr);
    let err = transport(Duration::from_millis(300)).get(&url).await.unwrap_err();

    match err {
        PricingError::Network(msg) => assert!(msg.contains("timed out"), "got {}", msg),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();

    let url = format!("http://{}/api/v1/regions/ec2", addr);
    let err = transport(Duration::from_secs(5)).get(&url).await.unwrap_err();

    assert!(matches!(err, PricingError::Network(_)), "got {:?}", err);
}
