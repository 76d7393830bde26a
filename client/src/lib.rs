//! # client
//!
//! Leptos + WASM frontend for the brochure website.
//!
//! Renders the pre-built page sections, the navigation bar, the greeting
//! widget and the contact form, and forwards every browser gesture to the
//! `site` core as a [`site::UiEvent`]. Browser-only side effects (alerts,
//! smooth scrolling, reading the clock) live in [`util::browser`].

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
