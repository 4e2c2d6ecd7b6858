//! Forwarding client for the opaque chat backend.
//!
//! DESIGN
//! ======
//! The host never interprets answers. It posts the validated request to the
//! configured backend and relays whatever JSON and status come back. Only
//! failures to obtain a JSON body are turned into `ProxyError`s.

#[cfg(test)]
#[path = "upstream_test.rs"]
mod upstream_test;

use axum::http::StatusCode;
use bca_client::net::types::ChatRequest;

use crate::config::BackendTimeouts;

/// Errors produced while forwarding a chat request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend did not answer within the request timeout.
    #[error("chat backend timed out")]
    Timeout,

    /// The backend could not be reached.
    #[error("chat backend unreachable: {0}")]
    Unreachable(String),

    /// The backend answered with a body that is not JSON.
    #[error("chat backend returned an invalid body: {0}")]
    InvalidBody(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Status the host answers with when forwarding fails.
pub fn proxy_error_to_status(err: &ProxyError) -> StatusCode {
    match err {
        ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        ProxyError::Unreachable(_) | ProxyError::InvalidBody(_) => StatusCode::BAD_GATEWAY,
        ProxyError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Status and JSON body returned by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    /// Build a client that forwards to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(url: impl Into<String>, timeouts: BackendTimeouts) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request)
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Post `request` to the backend and relay its answer.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, transport failure, or a non-JSON body.
    pub async fn forward(&self, request: &ChatRequest) -> Result<UpstreamReply, ProxyError> {
        let resp = self.http.post(&self.url).json(request).send().await.map_err(|e| {
            if e.is_timeout() {
                ProxyError::Timeout
            } else {
                ProxyError::Unreachable(e.to_string())
            }
        })?;

        let status = resp.status();
        let body = resp.json::<serde_json::Value>().await.map_err(|e| {
            if e.is_timeout() {
                ProxyError::Timeout
            } else {
                ProxyError::InvalidBody(e.to_string())
            }
        })?;

        Ok(UpstreamReply { status, body })
    }
}
