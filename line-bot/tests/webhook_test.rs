//! Webhook route tests: the endpoint always answers 200, garbage bodies
//! dispatch nothing, and the health route reports liveness.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use line_api::LineClient;
use line_bot::{router, Dispatcher, Services};
use tower::util::ServiceExt;

async fn test_app() -> (Arc<Services>, axum::Router) {
    // Port 9 (discard) is never connected: these tests exercise routes that
    // must not touch the platform API.
    let gateway = LineClient::with_base_url("test-token", "http://127.0.0.1:9");
    let services = Arc::new(
        Services::connect("sqlite::memory:", gateway)
            .await
            .expect("Failed to connect services"),
    );
    let dispatcher = Arc::new(Dispatcher::new(services.clone()));
    (services, router(dispatcher))
}

#[tokio::test]
async fn test_webhook_garbage_body_returns_200() {
    let (_services, app) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/webhook")
                .body(Body::from("definitely not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_webhook_follow_event_returns_200_without_platform_calls() {
    let (_services, app) = test_app().await;

    let body = r#"{
        "events": [{
            "type": "follow",
            "replyToken": "t1",
            "source": { "type": "user", "userId": "U1" },
            "timestamp": 1
        }]
    }"#;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/webhook")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_reports_ok() {
    let (_services, app) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], "1.0.0");
}
