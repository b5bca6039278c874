//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It draws into a plain
//! framebuffer that is then flushed to the terminal, without any widget or
//! layout library in between.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure: [`GameView`] turns a snapshot into a [`FrameBuffer`]
//! - Keep I/O in one place: [`TerminalRenderer`] owns raw mode and flushing

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, Viewport, MAX_CELL_H, MAX_CELL_W, MIN_CELL_W};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
