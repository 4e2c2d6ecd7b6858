//! # bca-client
//!
//! Leptos + WASM frontend for the BCA Expert chat: a welcome screen that
//! captures the first question and a chat screen that exchanges messages
//! with `POST /api/chat` and renders replies with their code citations.
//!
//! The chat state machine (`state::session`) and wire handling (`net`) are
//! plain Rust and run without either the `hydrate` or `ssr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
