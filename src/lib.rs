//! # Signup Board
//!
//! Client for the activities signup API: lists activities with their
//! participants, signs users up and unregisters participants.
//!
//! ## Modules
//!
//! - [`activity`]: Data model decoded from `GET /activities`
//! - [`view`]: View-model for the activity list and dropdown, with escaped markup
//! - [`status`]: Transient status messages with generation-checked expiry
//! - [`action`]: User actions decoded from element `data-*` attributes
//! - [`board`]: The [`ActivityBoard`] controller state machine
//! - [`tasks`]: One async task per request, returning typed outcomes
//! - [`client`]: The [`ActivityApi`] transport seam (reqwest transport with `native`)
//! - [`session`]: Drives a board against a transport and dialogs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use signup_board::{BoardSession, Config, ReqwestApi, TerminalPrompter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api = ReqwestApi::new(&config.api)?;
//!     let mut session = BoardSession::new(api, TerminalPrompter::default());
//!
//!     session.refresh().await;
//!     for card in session.board().view().cards() {
//!         println!("{}: {}", card.name, card.availability_text());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod activity;
pub mod board;
pub mod client;
pub mod escape;
pub mod prompt;
pub mod session;
pub mod status;
pub mod tasks;
pub mod view;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

pub use action::{Action, ActionKind};
pub use activity::{Activity, ActivityCatalog, ParticipantRef};
pub use board::{ActivityBoard, RefreshPhase, SignupEffects, SignupForm, SignupRequest};
pub use client::{ActivityApi, ApiError, Endpoints, ReplyBody};
pub use escape::escape_html;
pub use prompt::Prompter;
pub use session::{BoardSession, Dispatched, UnregisterResult};
pub use status::{StatusKind, StatusLine, StatusMessage, StatusTicket, HIDE_AFTER_MS};
pub use tasks::{RefreshOutcome, SignupOutcome, UnregisterOutcome};
pub use view::{ActivityCard, BoardView, ListState, ParticipantRow, SelectOption};

#[cfg(feature = "native")]
pub use client::ReqwestApi;
#[cfg(feature = "native")]
pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
#[cfg(feature = "native")]
pub use prompt::TerminalPrompter;
