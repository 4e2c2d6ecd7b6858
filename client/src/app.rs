//! Root application component, HTML shell and screen switch.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{chat::ChatPage, welcome::WelcomePage};
use crate::state::screen::{Screen, ScreenState};

/// Product name shown in headers and the page title.
pub const APP_NAME: &str = "BCA Expert App";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the screen router state and mounts the single route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let screen = RwSignal::new(ScreenState::default());
    provide_context(screen);

    view! {
        <Stylesheet id="leptos" href="/pkg/bca-expert.css"/>
        <Title text=APP_NAME/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Shows the welcome or chat screen.
///
/// Keyed on `(active, visit)` so every `start_chat` mounts a fresh chat
/// session and going home drops it.
#[component]
fn HomePage() -> impl IntoView {
    let screen = expect_context::<RwSignal<ScreenState>>();
    let current = Memo::new(move |_| screen.with(|s| (s.active, s.visit)));

    move || match current.get().0 {
        Screen::Welcome => view! { <WelcomePage app_name=APP_NAME/> }.into_any(),
        Screen::Chat => {
            let initial_query = screen.with_untracked(|s| s.initial_query.clone());
            view! { <ChatPage initial_query=initial_query app_name=APP_NAME/> }.into_any()
        }
    }
}
