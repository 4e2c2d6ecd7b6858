//! Brand mark shown on both screens.

use leptos::prelude::*;

/// Fixed path of the logo asset served by the host.
pub const LOGO_PATH: &str = "/logo.jpg";

/// Logo tile. `large` is used on the welcome screen.
#[component]
pub fn Logo(#[prop(optional)] large: bool, app_name: &'static str) -> impl IntoView {
    view! {
        <div class="logo" class:logo--large=large>
            <img class="logo__image" src=LOGO_PATH alt=format!("{app_name} Logo")/>
        </div>
    }
}
