//! # assistants-web
//!
//! Leptos + WASM frontend shell for the assistants chat view.
//!
//! This crate contains the chat layout with its collapsible agent panel, the
//! assistant tools panel, the client-side stores those components read and
//! write, and the REST helpers that load deployments, tools, agents and
//! experimental feature flags.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
