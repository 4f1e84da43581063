//! HTTP API
//!
//! Browser transport for the activities API and the dialogs the board uses.

pub mod client;
pub mod dialogs;

pub use client::{get_api_base, GlooApi};
pub use dialogs::BrowserPrompter;
