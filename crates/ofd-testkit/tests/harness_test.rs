//! Harness tests against a small mock service.

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use ofd_client::OfdClient;
use ofd_core::{ClientConfig, Credentials, Method};
use ofd_testkit::ApiHarness;
use serde_json::json;
use std::net::SocketAddr;
use tokio::net::TcpListener;

async fn start_mock() -> SocketAddr {
    let app = Router::new()
        .route(
            "/v1/documents",
            post(|| async { (StatusCode::OK, r#"{"result":[{"id":1}],"status":"ok"}"#) }),
        )
        .route(
            "/v1/limited",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "") }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    addr
}

fn harness(addr: SocketAddr) -> ApiHarness {
    let config = ClientConfig::new(
        format!("http://{addr}/v1/"),
        Credentials::ApiToken("t".into()),
    );
    ApiHarness::new(OfdClient::new(config).unwrap())
}

#[tokio::test]
async fn test_harness_stores_and_asserts_payload() {
    let addr = start_mock().await;
    let mut harness = harness(addr);

    harness
        .request(Method::Post, "documents", json!({}))
        .await
        .unwrap();

    harness.assert_status("ok");
    harness.assert_response_contains("result");
    harness.assert_response_contains_json(&json!({"result": [{"id": 1}]}));
    assert_eq!(harness.grab_by_pointer("/result/0/id"), Some(&json!(1)));
}

#[tokio::test]
async fn test_harness_stores_error_body_on_failure() {
    let addr = start_mock().await;
    let mut harness = harness(addr);

    let result = harness.request(Method::Post, "limited", json!({})).await;
    assert!(result.is_err());

    harness.assert_status("error");
    harness.assert_response_contains_json(&json!({"error_code": "http:503"}));
}

#[tokio::test]
#[should_panic(expected = "no response recorded yet")]
async fn test_assertions_require_a_request() {
    let addr = start_mock().await;
    let harness = harness(addr);
    harness.assert_status("ok");
}
