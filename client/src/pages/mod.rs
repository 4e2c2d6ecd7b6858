//! Page modules for the two top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns screen-scoped orchestration and delegates rendering details
//! to `components`.

pub mod chat;
pub mod welcome;
