//! REST helper for the single chat exchange.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): no request is made; the exchange only runs in the
//! browser, so the stub reports a transport error.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies are all
//! `ChatError`s. [`send_chat`] folds every one of them into
//! [`ChatReply::fallback`], so callers always receive a reply to append.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ChatReply;
#[cfg(feature = "hydrate")]
use super::types::ChatRequest;

/// Fixed path of the chat endpoint.
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Reasons a chat exchange did not produce a usable reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The request never completed (connection refused, DNS, aborted).
    #[error("chat request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("chat request failed: status {status}")]
    Status { status: u16 },

    /// The success body was not a valid reply.
    #[error("chat response parse failed: {0}")]
    Decode(String),
}

/// Turn a raw HTTP status and body into a reply.
///
/// # Errors
///
/// Returns [`ChatError::Status`] for non-2xx statuses and
/// [`ChatError::Decode`] when the body is not a valid reply.
pub fn decode_reply(status: u16, body: &str) -> Result<ChatReply, ChatError> {
    if !(200..300).contains(&status) {
        return Err(ChatError::Status { status });
    }
    serde_json::from_str(body).map_err(|e| ChatError::Decode(e.to_string()))
}

/// Collapse an exchange outcome into the reply shown to the user.
pub fn reply_or_fallback(outcome: Result<ChatReply, ChatError>) -> ChatReply {
    match outcome {
        Ok(reply) => reply,
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("error calling chat backend: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            ChatReply::fallback()
        }
    }
}

/// Post `message` to [`CHAT_ENDPOINT`].
///
/// # Errors
///
/// Returns a [`ChatError`] describing why no reply could be produced.
pub async fn try_send_chat(message: &str) -> Result<ChatReply, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(&ChatRequest::new(message))
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ChatError::Transport(e.to_string()))?;
        decode_reply(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(ChatError::Transport("not available on server".to_owned()))
    }
}

/// Post `message` and always return something to render.
pub async fn send_chat(message: &str) -> ChatReply {
    reply_or_fallback(try_send_chat(message).await)
}
