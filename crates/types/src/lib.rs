//! Core types module - shared data structures and constants
//!
//! This module defines the plain data shared by the engine, the input map and
//! the terminal view. Nothing here depends on I/O or on another crate.
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 4x4 grid addressed row-major:
//!
//! - **Linear index**: `0..16`, with `row = index / 4`, `col = index % 4`
//! - **Empty cell**: value `0`
//! - **Tile**: a nonzero power of two
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, CELL_COUNT, GRID_SIZE};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!(dir.is_horizontal());
//!
//! let action = GameAction::from_str("up").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(CELL_COUNT, 16);
//! ```

/// Grid side length in cells (4)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid (16)
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that wins the game
pub const WIN_TILE: u32 = 2048;

/// Chance out of 100 that a spawned tile is a 2 rather than a 4
pub const SPAWN_TWO_PERCENT: u32 = 90;

/// Value of the common spawned tile
pub const SPAWN_LOW: u32 = 2;

/// Value of the rare spawned tile
pub const SPAWN_HIGH: u32 = 4;


/// The four directions tiles can be pushed in
///
/// - **Left** / **Right**: horizontal, each row is a line
/// - **Up** / **Down**: vertical, each column is a line
///
/// The "near edge" of a line is the side the direction pushes toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order valid moves are reported
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// True for Left and Right
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when the near edge sits at the low index end of a line (Left, Up)
    pub fn is_ascending(&self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commands a player (or script) can issue to a running game
///
/// `Move` pushes every tile in one direction. `Restart` throws the board
/// away and deals a fresh one; it is not an undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge tiles toward one edge
    Move(Direction),
    /// Start over with an empty grid and one spawned tile
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Direction names become `Move`, `"restart"` becomes `Restart`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}
