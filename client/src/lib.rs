//! # portfolio-client
//!
//! Leptos + WASM frontend for the personal portfolio site.
//!
//! This crate contains the route-level pages, shared components, UI state
//! (contact form, settings, project catalog, profile) and the HTTP boundary
//! to the external portfolio backend. The host binary at the repository root
//! renders it on the server with the `ssr` feature; the browser bundle is
//! built with `hydrate`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
