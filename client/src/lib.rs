//! # client
//!
//! Leptos + WASM frontend for the nutrition tracker.
//!
//! This crate contains the authenticated shell (sidebar, header, user menu),
//! the route guard, the auth pages and the browser bindings (`localStorage`
//! token store, `gloo-net` transport) for the `session` crate.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // `tracing` in the session crate forwards through `log`.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
