//! Welcome screen: captures the first question and opens the chat.

#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::state::screen::ScreenState;

/// Accept `raw` as the opening query unless it is blank. The untrimmed text
/// is carried forward; the chat session trims it on submit.
pub fn welcome_query(raw: &str) -> Option<String> {
    (!raw.trim().is_empty()).then(|| raw.to_owned())
}

/// Apply a welcome-form submit to the router. Returns whether the screen
/// changed.
pub fn submit_welcome(screen: &mut ScreenState, raw: &str) -> bool {
    match welcome_query(raw) {
        Some(query) => {
            screen.start_chat(query);
            true
        }
        None => false,
    }
}

#[component]
pub fn WelcomePage(app_name: &'static str) -> impl IntoView {
    let screen = expect_context::<RwSignal<ScreenState>>();
    let query = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = query.get_untracked();
        if welcome_query(&raw).is_some() {
            screen.update(|s| {
                submit_welcome(s, &raw);
            });
        }
    };

    view! {
        <div class="welcome-page">
            <div class="welcome-card">
                <Logo large=true app_name=app_name/>
                <h1 class="welcome-card__title">{app_name}</h1>
                <p class="welcome-card__subtitle">"Your expert guide to the Building Code of Australia"</p>
                <form class="welcome-form" on:submit=on_submit>
                    <input
                        class="welcome-form__input"
                        type="text"
                        placeholder="Type your question..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </form>
                <p class="welcome-card__footer">"Based on the National Construction Code (NCC) 2022"</p>
            </div>
        </div>
    }
}
