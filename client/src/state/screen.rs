//! Which top-level screen is showing.
//!
//! DESIGN
//! ======
//! The app has exactly two screens. Leaving the chat screen drops its
//! session; `visit` increments on every `start_chat` so the page can mount a
//! fresh session even when the same query is entered twice.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

/// Active top-level screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Welcome,
    Chat,
}

/// Router state provided via context as `RwSignal<ScreenState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub active: Screen,
    /// Query carried from the welcome screen into the chat session.
    pub initial_query: String,
    pub visit: u64,
}

impl ScreenState {
    /// Store `query` and switch to the chat screen.
    pub fn start_chat(&mut self, query: impl Into<String>) {
        self.initial_query = query.into();
        self.active = Screen::Chat;
        self.visit += 1;
    }

    /// Return to the welcome screen, discarding the carried query.
    pub fn go_home(&mut self) {
        self.active = Screen::Welcome;
        self.initial_query.clear();
    }
}
