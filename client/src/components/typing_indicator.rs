//! Three-dot indicator shown while a reply is pending.

use leptos::prelude::*;

#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="chat-row chat-row--bot">
            <div class="chat-bubble chat-bubble--bot typing" aria-label="Waiting for reply">
                <span class="typing__dot"></span>
                <span class="typing__dot typing__dot--2"></span>
                <span class="typing__dot typing__dot--3"></span>
            </div>
        </div>
    }
}
