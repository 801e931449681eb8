//! FairSight: browser dashboard for mock AI-model compliance, bias, and
//! risk data.
//!
//! ARCHITECTURE
//! ============
//! The crate compiles two ways: as a WASM bundle (the `hydrate` feature,
//! which pulls in the browser-only dependencies and mounts the Leptos app),
//! and natively for unit tests, where browser glue is stubbed out and the
//! pure cores (session lifecycle, validation, dataset filters) are exercised
//! directly.
//!
//! All data sets are static in-memory literals; the only stateful component
//! is the session manager in [`session`], which owns the cookie-persisted
//! authentication lifecycle.

pub mod app;
pub mod components;
pub mod data;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: install logging and panic reporting, then mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
