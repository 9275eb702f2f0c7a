//! # client
//!
//! Leptos + WASM front end for the expense tracker's navigation bar and its
//! embedded chatbot.
//!
//! The chat widget keeps an ordered conversation log, shows a "Typing..."
//! placeholder while a reply is in flight, and splices the reply in when it
//! arrives. Replies come from the server's `/api/chat/reply` route, which
//! talks to the generation service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
