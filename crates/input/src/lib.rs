//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events into [`crate::types::GameAction`] values that a
//! `GameSession` can consume directly.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
