//! `POST /api/chat` forwarder.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bca_client::net::types::ChatRequest;
use serde_json::json;

use crate::state::AppState;
use crate::upstream::proxy_error_to_status;

const MESSAGE_REQUIRED: &str = "Message is required";

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Accept `payload` only if it carries a non-blank message.
fn validate_request(payload: Result<Json<ChatRequest>, JsonRejection>) -> Result<ChatRequest, Response> {
    match payload {
        Ok(Json(request)) if !request.message.trim().is_empty() => Ok(request),
        Ok(_) | Err(_) => Err(error_response(StatusCode::BAD_REQUEST, MESSAGE_REQUIRED)),
    }
}

/// Relay the question to the chat backend and pass its answer through.
pub async fn chat(State(state): State<AppState>, payload: Result<Json<ChatRequest>, JsonRejection>) -> Response {
    let request = match validate_request(payload) {
        Ok(request) => request,
        Err(resp) => return resp,
    };

    match state.upstream.forward(&request).await {
        Ok(reply) => {
            if !reply.status.is_success() {
                tracing::warn!(status = %reply.status, "chat backend returned error status");
            }
            (reply.status, Json(reply.body)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, backend = state.upstream.url(), "chat forward failed");
            error_response(proxy_error_to_status(&e), &e.to_string())
        }
    }
}
