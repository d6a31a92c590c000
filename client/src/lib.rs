//! DumpRun admin console.
//!
//! ARCHITECTURE
//! ============
//! `net` talks to the backend and identity provider, `state` holds the
//! session, grids, and forms, `router` drives guarded navigation, and
//! `pages`/`components` render it. The `hydrate` feature builds the browser
//! bundle; `ssr` lets the server render the shell.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating admin console");
    leptos::mount::hydrate_body(app::App);
}
