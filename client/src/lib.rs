//! # storefront-client
//!
//! Leptos + WASM frontend for the GadgetHub marketplace storefront.
//!
//! This crate contains pages, components, view-state reducers, and thin HTTP
//! clients for the auth, product, cart, order, and quotation services. All
//! persistence and business rules live in those remote services; the client
//! only builds requests and derives what to render from the responses.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
