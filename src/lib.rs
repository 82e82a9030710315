//! # tasks-client
//!
//! Leptos + WASM frontend for the task manager: login and registration
//! forms, protected task views, and a task form backed by a remote REST API.
//!
//! The session store, the auth gate and the REST clients are plain Rust and
//! run natively under `cargo test`; everything that touches the browser is
//! behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
