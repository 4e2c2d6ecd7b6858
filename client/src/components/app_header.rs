//! Chat screen header with the app name and a Home button.

use leptos::prelude::*;

use super::logo::Logo;

/// Header bar for the chat screen. `on_home` returns to the welcome screen.
#[component]
pub fn AppHeader(app_name: &'static str, on_home: Callback<()>) -> impl IntoView {
    view! {
        <header class="chat-header">
            <div class="chat-header__brand">
                <Logo app_name=app_name/>
                <h1 class="chat-header__title">{app_name}</h1>
            </div>
            <button
                class="chat-header__home"
                type="button"
                title="Home"
                aria-label="Home"
                on:click=move |_| on_home.run(())
            >
                "\u{2302}"
            </button>
        </header>
    }
}
