//! Chat session state machine.
//!
//! DESIGN
//! ======
//! `ChatSession` owns the transcript, the draft input and a single request
//! slot. Every mutation goes through a transition method; the page keeps the
//! session in one `RwSignal` and never edits fields directly.
//!
//! The slot holds at most one in-flight request, identified by a sequence
//! number. Submits that arrive while a request is outstanding wait in a FIFO
//! and their user message is appended only when they are dispatched, so the
//! transcript always alternates user, bot, user, bot. Settlements carrying a
//! sequence that is not in flight are dropped.
//!
//! Timestamps are passed in by the caller so transitions stay deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::{HashMap, VecDeque};

use crate::net::types::{ChatReply, Source};

/// Per-session message identifier, strictly increasing from 1.
pub type MessageId = u64;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One bubble in the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    /// Local wall-clock label (`HH:MM`) captured when the message was appended.
    pub timestamp: String,
    /// Citations; always empty for user messages.
    pub sources: Vec<Source>,
}

/// Thumbs up / thumbs down on a bot reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Helpful,
    NotHelpful,
}

/// A request handed to the network layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Dispatch {
    pub seq: u64,
    pub text: String,
}

/// Result of [`ChatSession::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing changed.
    Ignored,
    /// A user message was appended and this request must be sent now.
    Dispatched(Dispatch),
    /// A request is already in flight; the text waits its turn.
    Queued,
}

/// State owned by one mounted chat screen.
#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    transcript: Vec<Message>,
    in_flight: Option<u64>,
    queued: VecDeque<String>,
    draft: String,
    last_message_id: MessageId,
    last_seq: u64,
    ratings: HashMap<MessageId, Feedback>,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the query carried over from the welcome screen.
    ///
    /// Only a fresh session can be seeded, so repeated calls never send the
    /// initial query twice.
    pub fn seed(&mut self, initial_query: &str, timestamp: &str) -> Option<Dispatch> {
        if !self.transcript.is_empty() || self.is_pending() {
            return None;
        }
        match self.submit(initial_query, timestamp) {
            SubmitOutcome::Dispatched(dispatch) => Some(dispatch),
            SubmitOutcome::Ignored | SubmitOutcome::Queued => None,
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Number of submits waiting behind the in-flight request.
    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the send button should be enabled.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.is_pending() && !self.draft.trim().is_empty()
    }

    /// Submit `text` as the next user turn.
    pub fn submit(&mut self, text: &str, timestamp: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }
        self.draft.clear();
        if self.is_pending() {
            self.queued.push_back(text.to_owned());
            return SubmitOutcome::Queued;
        }
        SubmitOutcome::Dispatched(self.dispatch(text.to_owned(), timestamp))
    }

    /// Submit whatever is in the draft field.
    pub fn submit_draft(&mut self, timestamp: &str) -> SubmitOutcome {
        let text = std::mem::take(&mut self.draft);
        let outcome = self.submit(&text, timestamp);
        if outcome == SubmitOutcome::Ignored {
            self.draft = text;
        }
        outcome
    }

    /// Record the reply for request `seq` and release the slot.
    ///
    /// Returns the next queued request, which the caller must send. A `seq`
    /// that is not in flight is ignored.
    pub fn settle(&mut self, seq: u64, reply: ChatReply, timestamp: &str) -> Option<Dispatch> {
        if self.in_flight != Some(seq) {
            return None;
        }
        self.in_flight = None;
        let id = self.next_message_id();
        self.transcript.push(Message {
            id,
            text: reply.response,
            sender: Sender::Bot,
            timestamp: timestamp.to_owned(),
            sources: reply.sources,
        });

        let next = self.queued.pop_front()?;
        Some(self.dispatch(next, timestamp))
    }

    /// Rate a bot message. Choosing the current rating again clears it.
    ///
    /// Returns `false` when `id` is not a bot message in this transcript.
    pub fn rate(&mut self, id: MessageId, feedback: Feedback) -> bool {
        let is_bot = self.transcript.iter().any(|m| m.id == id && m.sender == Sender::Bot);
        if !is_bot {
            return false;
        }
        if self.ratings.get(&id) == Some(&feedback) {
            self.ratings.remove(&id);
        } else {
            self.ratings.insert(id, feedback);
        }
        true
    }

    #[must_use]
    pub fn rating(&self, id: MessageId) -> Option<Feedback> {
        self.ratings.get(&id).copied()
    }

    fn dispatch(&mut self, text: String, timestamp: &str) -> Dispatch {
        let id = self.next_message_id();
        self.transcript.push(Message {
            id,
            text: text.clone(),
            sender: Sender::User,
            timestamp: timestamp.to_owned(),
            sources: Vec::new(),
        });
        self.last_seq += 1;
        self.in_flight = Some(self.last_seq);
        Dispatch { seq: self.last_seq, text }
    }

    fn next_message_id(&mut self) -> MessageId {
        self.last_message_id += 1;
        self.last_message_id
    }
}
