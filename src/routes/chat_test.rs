use super::*;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::routing::post;
use serde_json::Value;

use crate::config::BackendTimeouts;
use crate::routes::api_routes;
use crate::upstream::UpstreamClient;

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn timeouts(request_ms: u64) -> BackendTimeouts {
    BackendTimeouts { request: Duration::from_millis(request_ms), connect: Duration::from_secs(1) }
}

/// Start the host API routes forwarding to `backend`.
async fn spawn_host(backend: String, request_ms: u64) -> SocketAddr {
    let upstream = UpstreamClient::new(backend, timeouts(request_ms)).unwrap();
    spawn(api_routes(AppState::new(upstream))).await
}

/// A backend that answers every question about ceilings and counts calls.
async fn spawn_backend(calls: Arc<AtomicUsize>) -> String {
    let app = Router::new().route(
        "/api/chat",
        post(move |Json(body): Json<Value>| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                let message = body.get("message").and_then(Value::as_str).unwrap_or_default().to_owned();
                Json(json!({
                    "response": format!("echo: {message}"),
                    "sources": [{ "section": "F2.1", "title": "Ceiling Height", "excerpt": "..." }],
                    "timestamp": "2025-01-01T10:00:00"
                }))
            }
        }),
    );
    format!("http://{}/api/chat", spawn(app).await)
}

async fn post_chat(host: SocketAddr, body: &Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("http://{host}/api/chat"))
        .json(body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn forwards_message_and_relays_reply() {
    let calls = Arc::new(AtomicUsize::new(0));
    let host = spawn_host(spawn_backend(calls.clone()).await, 2_000).await;

    let (status, body) = post_chat(host, &json!({ "message": "What is the minimum ceiling height?" })).await;

    assert_eq!(status, 200);
    assert_eq!(body["response"], "echo: What is the minimum ceiling height?");
    assert_eq!(body["sources"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["sources"][0]["section"], "F2.1");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blank_message_is_rejected_without_forwarding() {
    let calls = Arc::new(AtomicUsize::new(0));
    let host = spawn_host(spawn_backend(calls.clone()).await, 2_000).await;

    let (status, body) = post_chat(host, &json!({ "message": "   " })).await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "error": "Message is required" }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_message_field_is_rejected() {
    let calls = Arc::new(AtomicUsize::new(0));
    let host = spawn_host(spawn_backend(calls.clone()).await, 2_000).await;

    let (status, body) = post_chat(host, &json!({ "text": "hello" })).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Message is required");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn backend_error_status_is_relayed() {
    let backend = Router::new().route(
        "/api/chat",
        post(|| async {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Internal server error" })))
        }),
    );
    let backend_url = format!("http://{}/api/chat", spawn(backend).await);
    let host = spawn_host(backend_url, 2_000).await;

    let (status, body) = post_chat(host, &json!({ "message": "fire" })).await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    // Bind then drop to get a port nobody is listening on.
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
    let host = spawn_host(format!("http://{closed}/api/chat"), 2_000).await;

    let (status, body) = post_chat(host, &json!({ "message": "fire" })).await;

    assert_eq!(status, 502);
    assert!(body["error"].as_str().unwrap().starts_with("chat backend unreachable"));
}

#[tokio::test]
async fn slow_backend_is_gateway_timeout() {
    let backend = Router::new().route(
        "/api/chat",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "response": "too late" }))
        }),
    );
    let backend_url = format!("http://{}/api/chat", spawn(backend).await);
    let host = spawn_host(backend_url, 200).await;

    let (status, body) = post_chat(host, &json!({ "message": "fire" })).await;

    assert_eq!(status, 504);
    assert_eq!(body, json!({ "error": "chat backend timed out" }));
}

#[tokio::test]
async fn non_json_backend_body_is_bad_gateway() {
    let backend = Router::new().route("/api/chat", post(|| async { "<html>maintenance</html>" }));
    let backend_url = format!("http://{}/api/chat", spawn(backend).await);
    let host = spawn_host(backend_url, 2_000).await;

    let (status, body) = post_chat(host, &json!({ "message": "fire" })).await;

    assert_eq!(status, 502);
    assert!(body["error"].as_str().unwrap().starts_with("chat backend returned an invalid body"));
}
