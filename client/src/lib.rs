//! # client
//!
//! Leptos + WASM frontend for LegalEase, the legal document simplifier.
//!
//! This crate contains pages, components, application state, and the HTTP
//! helpers that talk to the analysis backend through the host server. The
//! interesting control flow lives in `state::submission`: the upload
//! pre-check coordinator that decides whether a document may proceed to
//! full analysis.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
