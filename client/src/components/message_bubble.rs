//! One transcript bubble with timestamp, citations and feedback buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! User bubbles render their text verbatim with preserved whitespace. Bot
//! bubbles render Markdown (raw HTML stripped), their sources, and
//! Helpful / Not helpful toggles wired back into the session.

#[cfg(test)]
#[path = "message_bubble_test.rs"]
mod message_bubble_test;

use leptos::prelude::*;

use super::source_list::SourceList;
use crate::state::session::{Feedback, Message, MessageId, Sender};
use crate::util::markdown::render_markdown_html;

/// Row alignment modifier for a sender.
pub fn row_modifier(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "chat-row chat-row--user",
        Sender::Bot => "chat-row chat-row--bot",
    }
}

/// Bubble colour modifier for a sender.
pub fn bubble_modifier(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "chat-bubble chat-bubble--user",
        Sender::Bot => "chat-bubble chat-bubble--bot",
    }
}

/// A single transcript message.
#[component]
pub fn MessageBubble(
    message: Message,
    #[prop(into)] rating: Signal<Option<Feedback>>,
    on_rate: Callback<(MessageId, Feedback)>,
) -> impl IntoView {
    let Message { id, text, sender, timestamp, sources } = message;
    let is_bot = sender == Sender::Bot;

    let body = if is_bot {
        let rendered = render_markdown_html(&text);
        view! { <div class="chat-bubble__markdown" inner_html=rendered></div> }.into_any()
    } else {
        view! { <div class="chat-bubble__text">{text}</div> }.into_any()
    };

    let feedback = is_bot.then(move || {
        view! {
            <div class="feedback">
                <button
                    class="feedback__button"
                    type="button"
                    title="Helpful"
                    class:feedback__button--active=move || rating.get() == Some(Feedback::Helpful)
                    on:click=move |_| on_rate.run((id, Feedback::Helpful))
                >
                    "\u{1F44D}"
                </button>
                <button
                    class="feedback__button"
                    type="button"
                    title="Not helpful"
                    class:feedback__button--active=move || rating.get() == Some(Feedback::NotHelpful)
                    on:click=move |_| on_rate.run((id, Feedback::NotHelpful))
                >
                    "\u{1F44E}"
                </button>
            </div>
        }
    });

    view! {
        <div class=row_modifier(sender)>
            <div class=bubble_modifier(sender)>
                {body}
                <SourceList sources=sources/>
                <div class="chat-bubble__meta">
                    <span class="chat-bubble__time">{timestamp}</span>
                    {feedback}
                </div>
            </div>
        </div>
    }
}
