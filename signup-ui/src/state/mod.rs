//! State Management
//!
//! Reactive wrapper around the board controller.

pub mod board;

pub use board::{provide_board_state, BoardState};
