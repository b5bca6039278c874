//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules and state. It has **zero dependencies**
//! on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Spawns can be scripted through [`TileSpawner`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: A move is a handful of passes over a 16-cell array
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 grid with the slide/merge algorithm
//! - [`engine`]: [`GameEngine`], the grid plus its tile spawner
//! - [`spawn`]: tile spawning behind the [`TileSpawner`] trait
//! - [`session`]: turn controller gating input on win/loss/valid moves
//! - [`snapshot`]: render-ready copy of the game
//! - [`error`]: grid access errors
//!
//! # Game Rules
//!
//! - **Move**: every tile slides toward one edge; equal neighbours merge once
//! - **Spawn**: after each accepted move a 2 (90%) or a 4 (10%) appears in a
//!   random empty cell
//! - **Win**: a 2048 tile appears (play may continue past it)
//! - **Loss**: no direction changes the grid
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameEngine;
//! use tui_2048_types::Direction;
//!
//! let mut game = GameEngine::new(12345);
//! assert_eq!(game.empty_count(), 15);
//!
//! for dir in game.valid_moves() {
//!     let mut trial = game.clone();
//!     assert!(trial.apply_move(dir));
//! }
//!
//! if let Some(&dir) = game.valid_moves().first() {
//!     game.apply_move(dir);
//!     game.add_new_tile();
//! }
//! assert!(!game.has_won());
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod session;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::GameEngine;
pub use error::GridError;
pub use grid::Grid;
pub use session::{GameSession, TurnOutcome};
pub use snapshot::{GameSnapshot, SessionStatus};
pub use spawn::{SeededSpawner, TileSpawner};
