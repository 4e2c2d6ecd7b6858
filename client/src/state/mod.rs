//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `screen` is the two-screen router, `session` the chat state machine and
//! `exchange` the guard that ties an in-flight request to its session.

pub mod exchange;
pub mod screen;
pub mod session;
