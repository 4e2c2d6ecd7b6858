//! Guaranteed release of the session's request slot.
//!
//! A `PendingGuard` is created when a request is dispatched and holds its
//! sequence number. Settling consumes the guard; dropping it unsettled (the
//! task was dropped or panicked mid-await) settles the request with the
//! fallback reply, so the pending flag can never stay stuck.

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;

use leptos::prelude::*;

use super::session::{ChatSession, Dispatch};
use crate::net::types::ChatReply;
use crate::util::clock::local_time_label;

/// Owns the in-flight request slot of a session until it settles.
#[must_use]
pub struct PendingGuard {
    session: RwSignal<ChatSession>,
    seq: Option<u64>,
    on_next: fn(RwSignal<ChatSession>, Dispatch),
}

impl PendingGuard {
    /// Take ownership of `dispatch`'s slot. `on_next` receives any queued
    /// request released by the settlement.
    pub fn new(session: RwSignal<ChatSession>, dispatch: &Dispatch, on_next: fn(RwSignal<ChatSession>, Dispatch)) -> Self {
        Self { session, seq: Some(dispatch.seq), on_next }
    }

    /// Record `reply` and release the slot.
    pub fn settle(mut self, reply: ChatReply) {
        if let Some(seq) = self.seq.take() {
            self.finish(seq, reply);
        }
    }

    fn finish(&self, seq: u64, reply: ChatReply) {
        let timestamp = local_time_label();
        let next = self.session.try_update(|s| s.settle(seq, reply, &timestamp)).flatten();
        if let Some(next) = next {
            (self.on_next)(self.session, next);
        }
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if let Some(seq) = self.seq.take() {
            self.finish(seq, ChatReply::fallback());
        }
    }
}
