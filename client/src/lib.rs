//! # client
//!
//! Leptos + WASM frontend for Delfos. Pages, components, and reactive state
//! live here; HTTP plumbing, DTO mapping, and every business rule live in the
//! `api` crate so they test without a browser.
//!
//! The `hydrate` feature builds the browser bundle; `ssr` builds the server
//! side rendered by the host binary.

pub mod app;
pub mod components;
pub mod net;
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
