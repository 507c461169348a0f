//! # client
//!
//! Leptos + WASM frontend for Stakr: landing page, login/signup (as pages or
//! as modals over the page they were opened from), the dashboard, and the
//! navigation chrome around them.
//!
//! Session, locale, routing, and form rules live in the `flows` crate; this
//! crate wires them into signals and components and talks to the backend
//! through `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Warn };
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
