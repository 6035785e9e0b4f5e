//! # client
//!
//! Leptos + WASM frontend for the neighborhood issue reporter: a home feed
//! of reported civic issues, a placeholder map with filters, and a report
//! submission form.
//!
//! The same crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Domain rules live in `state` as plain Rust so they are tested
//! without either feature.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
