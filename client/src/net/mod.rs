//! Networking for the chat exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single `POST /api/chat` call and folds failures into
//! the fallback reply; `types` defines the wire schema shared with the host
//! server.

pub mod api;
pub mod types;
