//! Integration tests for the user-count API client against a mock server.

mod common;

use common::{MockResponse, MockServer};
use usertally::api::{ApiClient, ApiError};

#[tokio::test]
async fn fetches_total_users() {
    let server = MockServer::start().await;
    server.enqueue(MockResponse::count(42)).await;

    let client = ApiClient::new(&server.base_url());
    let payload = client.total_users().await.unwrap();

    assert_eq!(payload.status, "ok");
    assert_eq!(payload.total_users, 42);
}

#[tokio::test]
async fn missing_total_users_field_defaults_to_zero() {
    let server = MockServer::start().await;
    server.enqueue(MockResponse::json(r#"{"status": "ok"}"#)).await;

    let client = ApiClient::new(&server.base_url());
    let payload = client.total_users().await.unwrap();

    assert_eq!(payload.total_users, 0);
}

#[tokio::test]
async fn server_error_is_a_network_error() {
    let server = MockServer::start().await;
    server.enqueue(MockResponse::error(500, "boom")).await;

    let client = ApiClient::new(&server.base_url());
    let err = client.total_users().await.unwrap_err();

    assert!(matches!(err, ApiError::Network { .. }));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    server.enqueue(MockResponse::json("count: lots")).await;

    let client = ApiClient::new(&server.base_url());
    let err = client.total_users().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    // Bind then drop a listener to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}", addr));
    let err = client.total_users().await.unwrap_err();

    assert!(matches!(err, ApiError::Network { .. }));
}

#[tokio::test]
async fn each_call_issues_one_request() {
    let server = MockServer::start().await;
    server.enqueue(MockResponse::count(1)).await;
    server.enqueue(MockResponse::count(2)).await;

    let client = ApiClient::new(&server.base_url());
    assert_eq!(client.total_users().await.unwrap().total_users, 1);
    assert_eq!(client.total_users().await.unwrap().total_users, 2);
    assert_eq!(server.request_count().await, 2);
}
