//! # client
//!
//! Leptos + WASM frontend for the PilotPrep maritime pilot exam platform.
//!
//! This crate contains the session core (auth store, token sync, persisted
//! session storage, route guards), the API adapter, and the pages. The
//! quiz content itself is owned by the backend API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server render.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
