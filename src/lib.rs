//! # activity-board
//!
//! Leptos + WASM frontend for the extracurricular activity signup page.
//! Lists activities from the backend, lets a student sign up by email and
//! lets an organizer remove a participant. All state is owned by the server;
//! the client re-fetches the catalog after every confirmed change.
//!
//! Browser I/O is gated behind the `csr` feature so the state and parsing
//! layers build and test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
