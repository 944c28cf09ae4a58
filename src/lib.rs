//! # finboard
//!
//! Leptos + WASM frontend for the Finboard personal-finance service.
//!
//! The crate is organized around three reactive stores (`state`): the
//! session store owns the auth token and user profile, and the finance and
//! posts stores cache reference data fetched through the request gateway
//! (`net`). Pages and components consume the stores via context; the
//! durable token slot (`util::storage`) carries the session across reloads.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the client-side app to the server-rendered
/// DOM and wire up console logging and panic reporting.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
