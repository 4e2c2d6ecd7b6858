//! Wire DTOs for the `/api/chat` exchange.
//!
//! DESIGN
//! ======
//! The backend is an opaque service, so decoding is lenient: unknown fields
//! are ignored and a missing or `null` `sources` array becomes an empty list.
//! The host server reuses these types to validate forwarded requests.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// User-visible text substituted whenever the backend call does not succeed.
pub const FALLBACK_TEXT: &str =
    "I'm sorry, I'm having trouble connecting to the server right now. Please try again later.";

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// A citation attached to a bot reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Code section label (e.g. `"Section C1.1"`).
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub title: String,
    /// Short snippet quoted from the section.
    #[serde(default)]
    pub excerpt: String,
}

/// Success body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default, deserialize_with = "deserialize_nullable_sources")]
    pub sources: Vec<Source>,
    /// Server-side ISO timestamp. Informational only; bubbles show local time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ChatReply {
    /// The reply used for every failed exchange.
    #[must_use]
    pub fn fallback() -> Self {
        Self { response: FALLBACK_TEXT.to_owned(), sources: Vec::new(), timestamp: None }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.response == FALLBACK_TEXT && self.sources.is_empty()
    }
}

fn deserialize_nullable_sources<'de, D>(deserializer: D) -> Result<Vec<Source>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Source>>::deserialize(deserializer)?.unwrap_or_default())
}
