//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render transcript bubbles and screen chrome. They receive data
//! and callbacks as props and never touch session state directly.

pub mod app_header;
pub mod logo;
pub mod message_bubble;
pub mod source_list;
pub mod typing_indicator;
