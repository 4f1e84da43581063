//! Signup Board
//!
//! Activity signup front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with availability and participant rosters
//! - Signup form with transient status messages
//! - Click-to-unregister on any participant row
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The board state machine lives in the `signup-board` crate;
//! this crate supplies the gloo-net transport, browser dialogs and the views.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Core tracing events reach the developer console through the log bridge
    let _ = console_log::init_with_level(log::Level::Info);

    mount_to_body(|| view! { <app::App /> });
}
