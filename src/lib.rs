#![recursion_limit = "512"]
//! GovData Insight — browser chat client for agricultural and climate
//! data analysis.
//!
//! The crate compiles three ways: default features for native logic tests,
//! `hydrate` for the WASM client, and `ssr` for the Axum host binary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
