//! Chat screen: transcript, pending indicator and input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `ChatSession` for as long as the screen is mounted. Handlers only
//! call session transitions; any `Dispatch` they produce is handed to
//! `run_exchange`, which performs the request under a `PendingGuard`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::message_bubble::MessageBubble;
use crate::components::typing_indicator::TypingIndicator;
use crate::state::exchange::PendingGuard;
use crate::state::screen::ScreenState;
use crate::state::session::{ChatSession, Dispatch, Feedback, Message, MessageId, SubmitOutcome};
use crate::util::clock::local_time_label;

/// Enter sends; Shift+Enter does not.
pub fn is_send_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Build the request task for `dispatch`. The guard is taken before the task
/// is first polled, so a task dropped unpolled still releases the slot.
fn exchange_task(session: RwSignal<ChatSession>, dispatch: Dispatch) -> impl Future<Output = ()> + 'static {
    let guard = PendingGuard::new(session, &dispatch, run_exchange);
    async move {
        let reply = crate::net::api::send_chat(&dispatch.text).await;
        guard.settle(reply);
    }
}

/// Send `dispatch` and feed the reply back into `session`.
fn run_exchange(session: RwSignal<ChatSession>, dispatch: Dispatch) {
    let task = exchange_task(session, dispatch);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    // Off-browser there is no transport; the unpolled task settles with the fallback.
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}

/// Send `initial_query` as the opening question of an empty session.
fn seed_session(session: RwSignal<ChatSession>, initial_query: &str) {
    let timestamp = local_time_label();
    let dispatch = session.try_update(|s| s.seed(initial_query, &timestamp)).flatten();
    if let Some(dispatch) = dispatch {
        run_exchange(session, dispatch);
    }
}

fn dispatch_of(outcome: SubmitOutcome) -> Option<Dispatch> {
    match outcome {
        SubmitOutcome::Dispatched(dispatch) => Some(dispatch),
        SubmitOutcome::Ignored | SubmitOutcome::Queued => None,
    }
}

#[component]
pub fn ChatPage(initial_query: String, app_name: &'static str) -> impl IntoView {
    let screen = expect_context::<RwSignal<ScreenState>>();
    let session = RwSignal::new(ChatSession::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Seed with the welcome query. Reads nothing reactively, so it runs once.
    Effect::new(move || seed_session(session, &initial_query));

    Effect::new(move || {
        let _ = session.with(|s| (s.transcript().len(), s.is_pending()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let timestamp = local_time_label();
        let dispatch = session.try_update(|s| dispatch_of(s.submit_draft(&timestamp))).flatten();
        if let Some(dispatch) = dispatch {
            run_exchange(session, dispatch);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_send_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let on_rate = Callback::new(move |(id, feedback): (MessageId, Feedback)| {
        session.update(|s| {
            s.rate(id, feedback);
        });
    });

    let on_home = Callback::new(move |()| screen.update(ScreenState::go_home));

    let is_pending = move || session.with(ChatSession::is_pending);

    view! {
        <div class="chat-page">
            <AppHeader app_name=app_name on_home=on_home/>

            <div class="chat-page__messages" node_ref=messages_ref>
                <For
                    each=move || session.with(|s| s.transcript().to_vec())
                    key=|message: &Message| message.id
                    children=move |message: Message| {
                        let id = message.id;
                        let rating = Signal::derive(move || session.with(|s| s.rating(id)));
                        view! { <MessageBubble message=message rating=rating on_rate=on_rate/> }
                    }
                />
                <Show when=is_pending>
                    <TypingIndicator/>
                </Show>
            </div>

            <div class="chat-input">
                <input
                    class="chat-input__field"
                    type="text"
                    placeholder="Ask about building codes..."
                    disabled=is_pending
                    prop:value=move || session.with(|s| s.draft().to_owned())
                    on:input=move |ev| session.update(|s| s.set_draft(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button
                    class="chat-input__send"
                    type="button"
                    on:click=move |_| do_send()
                    disabled=move || !session.with(ChatSession::can_send)
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
