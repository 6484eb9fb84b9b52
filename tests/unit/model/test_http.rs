use mockito::Server;
use order_scenario::config::RestApiConfig;
use order_scenario::error::AppError;
use order_scenario::model::http::{HttpClient, join_url};
use serde_json::json;

#[test]
fn test_join_url() {
    assert_eq!(join_url("http://localhost:8080/", ""), "http://localhost:8080/");
    assert_eq!(join_url("http://localhost:8080", ""), "http://localhost:8080/");
    assert_eq!(
        join_url("http://localhost:8080/", "order"),
        "http://localhost:8080/order"
    );
    assert_eq!(
        join_url("http://localhost:8080", "/account"),
        "http://localhost:8080/account"
    );
    assert_eq!(
        join_url("http://host/api/", "/order"),
        "http://host/api/order"
    );
}

#[test]
fn test_http_client_url() {
    let client = HttpClient::new(&RestApiConfig {
        base_url: "http://localhost:8080/".to_string(),
    })
    .unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080/");
    assert_eq!(client.url("order"), "http://localhost:8080/order");
}

#[test]
fn test_http_client_invalid_base_url() {
    let result = HttpClient::new(&RestApiConfig {
        base_url: "localhost".to_string(),
    });
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_requests_carry_json_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_header("content-type", "application/json")
        .match_header("user-agent", "order-scenario/0.1.0")
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let client = HttpClient::new(&RestApiConfig {
        base_url: server.url(),
    })
    .unwrap();
    let body = client.get("").await.unwrap();

    assert_eq!(body, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_session_is_reused_across_calls() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/order")
        .with_status(200)
        .with_body("{}")
        .expect(3)
        .create_async()
        .await;

    let client = HttpClient::new(&RestApiConfig {
        base_url: server.url(),
    })
    .unwrap();
    for _ in 0..3 {
        client.post("order", json!({"n": 1})).await.unwrap();
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/account")
        .with_status(503)
        .create_async()
        .await;

    let client = HttpClient::new(&RestApiConfig {
        base_url: server.url(),
    })
    .unwrap();
    let err = client.delete("account").await.unwrap_err();

    match err {
        AppError::Unexpected(status) => assert_eq!(status.as_u16(), 503),
        other => panic!("Expected Unexpected, got {other:?}"),
    }
}
