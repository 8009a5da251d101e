//! End-to-end tests: flow controller + HTTP client against an in-process backend.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use verify_flow::domains::verification::{VerificationFlow, VerificationStatus};
use verify_flow::kernel::FlowDeps;
use verify_flow::Config;

const PHONE: &str = "+491752350401";

/// Fake backend: remembers the last code it texted and accepts only that one.
#[derive(Clone, Default)]
struct FakeBackend {
    issued: Arc<Mutex<Option<(String, String)>>>,
    throttle: bool,
}

async fn create_subscriber(
    State(backend): State<FakeBackend>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if backend.throttle {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": "Too many requests" })),
        );
    }
    let phone = body["phoneE164"].as_str().unwrap_or_default().to_string();
    *backend.issued.lock().unwrap() = Some((phone, "123456".to_string()));
    (StatusCode::OK, Json(json!({ "ok": true })))
}

async fn verify_subscriber(
    State(backend): State<FakeBackend>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let submitted = (
        body["phoneE164"].as_str().unwrap_or_default().to_string(),
        body["code"].as_str().unwrap_or_default().to_string(),
    );
    let mut issued = backend.issued.lock().unwrap();
    if issued.as_ref() == Some(&submitted) {
        // Codes are single-use
        *issued = None;
        (StatusCode::OK, Json(json!({ "ok": true })))
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({})))
    }
}

async fn spawn_backend(backend: FakeBackend) -> String {
    let app = Router::new()
        .route("/api/subscribers", post(create_subscriber))
        .route("/api/subscribers/verify", post(verify_subscriber))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn flow_for(base_url: String) -> VerificationFlow {
    let config = Config::with_base_url(base_url).unwrap();
    VerificationFlow::new(FlowDeps::from_config(&config))
}

#[tokio::test]
async fn subscribes_with_texted_code() {
    let url = spawn_backend(FakeBackend::default()).await;
    let flow = flow_for(url);

    flow.set_phone(PHONE);
    assert_eq!(flow.request_code().await, Ok(VerificationStatus::CodeSent));

    flow.set_code("123456");
    assert_eq!(flow.verify_code().await, Ok(VerificationStatus::Verified));

    let state = flow.state();
    assert_eq!(state.code, "");
    assert!(!state.sending && !state.verifying);
}

#[tokio::test]
async fn wrong_code_uses_fallback_and_keeps_input() {
    let url = spawn_backend(FakeBackend::default()).await;
    let flow = flow_for(url);

    flow.set_phone(PHONE);
    flow.request_code().await.unwrap();
    flow.set_code("654321");

    assert_eq!(
        flow.verify_code().await,
        Ok(VerificationStatus::Failed("Invalid or expired code".into()))
    );
    assert_eq!(flow.state().code, "654321");
}

#[tokio::test]
async fn consumed_code_cannot_be_reused() {
    let url = spawn_backend(FakeBackend::default()).await;
    let flow = flow_for(url);

    flow.set_phone(PHONE);
    flow.request_code().await.unwrap();
    flow.set_code("123456");
    flow.verify_code().await.unwrap();

    flow.set_code("123456");
    assert!(flow.verify_code().await.unwrap().is_failed());
}

#[tokio::test]
async fn throttled_send_shows_server_message() {
    let url = spawn_backend(FakeBackend {
        throttle: true,
        ..FakeBackend::default()
    })
    .await;
    let flow = flow_for(url);

    flow.set_phone(PHONE);
    let status = flow.request_code().await.unwrap();

    assert_eq!(status, VerificationStatus::Failed("Too many requests".into()));
    assert!(!flow.state().sending);
}

#[tokio::test]
async fn unreachable_backend_fails_and_releases_flag() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let flow = flow_for(url);

    flow.set_phone(PHONE);
    let status = flow.request_code().await.unwrap();

    assert!(status.is_failed());
    assert!(!status.failure().unwrap_or_default().is_empty());
    assert!(!flow.state().sending);
}
