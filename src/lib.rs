//! # auth-client
//!
//! Leptos + WASM front-end for cookie-session authentication against a
//! remote HTTP API: registration, login, logout, email verification, and
//! password recovery.
//!
//! No token ever touches client storage. The session lives in an httpOnly
//! cookie the browser attaches automatically; the client only tracks its
//! believed login state, reconciled once per page load via `/auth/me`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
