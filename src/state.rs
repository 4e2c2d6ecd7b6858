//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no per-user data; the only shared resource is the pooled HTTP
//! client used to reach the chat backend.

use crate::upstream::UpstreamClient;

/// Clone is required by Axum; `reqwest::Client` is internally reference counted.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }
}
