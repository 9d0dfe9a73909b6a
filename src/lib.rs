//! # nof0-web
//!
//! Leptos + WASM front end for the nof0 dashboard, reduced to its paused
//! state: a fixed header with social links and a full-viewport announcement
//! overlay. Everything renders from static configuration; there is no
//! application state and no API traffic while the backend is rebuilt.

pub mod app;
pub mod components;
pub mod util;

/// WASM entry point: install browser logging, then hydrate the server shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating nof0 chrome");
    leptos::mount::hydrate_body(app::App);
}
