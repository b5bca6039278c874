//! Game engine - the grid plus a tile spawner
//!
//! [`GameEngine`] is a plain value: it owns its [`Grid`] and its
//! [`TileSpawner`] and does no I/O. A turn is two separate calls, a move and
//! then a spawn; the engine never spawns on its own and never refuses a move.
//! Rejecting a move that changes nothing, and acting on a win or a loss, is
//! the caller's business (see [`GameSession`](crate::session::GameSession)).

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::error::GridError;
use crate::grid::Grid;
use crate::snapshot::{GameSnapshot, SessionStatus};
use crate::spawn::{SeededSpawner, TileSpawner};
use crate::types::{Direction, WIN_TILE};

/// The 2048 game state: a 4x4 grid and the spawner that feeds it.
#[derive(Debug, Clone)]
pub struct GameEngine<S: TileSpawner = SeededSpawner> {
    grid: Grid,
    spawner: S,
}

impl GameEngine<SeededSpawner> {
    /// New game with a seeded spawner and one tile on the grid.
    pub fn new(seed: u64) -> Self {
        Self::with_spawner(SeededSpawner::new(seed))
    }

    /// New game seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_spawner(SeededSpawner::from_entropy())
    }
}

impl<S: TileSpawner> GameEngine<S> {
    /// New game with an empty grid that immediately receives one tile.
    pub fn with_spawner(spawner: S) -> Self {
        let mut engine = Self {
            grid: Grid::new(),
            spawner,
        };
        engine.add_new_tile();
        engine
    }

    /// Start from an explicit grid. Nothing is spawned.
    pub fn from_grid(grid: Grid, spawner: S) -> Self {
        Self { grid, spawner }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Value at linear index `index` (0 for an empty cell).
    ///
    /// ```
    /// use tui_2048_core::{GameEngine, GridError};
    ///
    /// let engine = GameEngine::new(1);
    /// assert!(engine.value_at(15).is_ok());
    /// assert_eq!(engine.value_at(16), Err(GridError::OutOfRange { index: 16 }));
    /// ```
    pub fn value_at(&self, index: usize) -> Result<u32, GridError> {
        self.grid.value_at(index)
    }

    /// Slide and merge every line toward `direction`.
    ///
    /// A move that changes nothing is allowed and leaves the grid as it was.
    /// Returns true if the grid changed.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let changed = self.grid.slide(direction);
        if changed {
            debug!("moved {direction}, max tile {}", self.grid.max_tile());
        } else {
            trace!("move {direction} left the grid unchanged");
        }
        changed
    }

    /// Spawn a 2 (90%) or a 4 (10%) into a random empty cell.
    ///
    /// Returns the linear index that received the tile, or `None` when the
    /// grid is full (a no-op).
    pub fn add_new_tile(&mut self) -> Option<usize> {
        let empty = self.grid.empty_cells();
        let last = empty.len().checked_sub(1)?;

        let (slot, value) = self.spawner.spawn(empty.len());
        let index = empty[slot.min(last)];
        self.grid.fill(index, value);
        debug!("spawned {value} at cell {index}");
        Some(index)
    }

    /// Directions that would change the grid, in `Direction::ALL` order.
    ///
    /// Each direction is tried on a scratch copy of the grid.
    pub fn valid_moves(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_move(dir))
            .collect()
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        self.grid.slid(direction) != self.grid
    }

    /// True once a 2048 tile is on the grid.
    ///
    /// Advisory only: the engine keeps accepting moves, and a tile grown past
    /// 2048 by continued play still counts.
    pub fn has_won(&self) -> bool {
        self.grid.cells().iter().any(|&v| v >= WIN_TILE)
    }

    /// True when no direction changes the grid.
    pub fn is_stuck(&self) -> bool {
        Direction::ALL.into_iter().all(|dir| !self.can_move(dir))
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    pub fn empty_count(&self) -> usize {
        self.grid.empty_count()
    }

    /// Empty the grid and spawn one tile. The spawner keeps its state.
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.add_new_tile();
    }

    /// Snapshot with the status derived from the grid alone.
    pub fn snapshot(&self) -> GameSnapshot {
        let status = if self.has_won() {
            SessionStatus::Won
        } else if self.is_stuck() {
            SessionStatus::Lost
        } else {
            SessionStatus::Playing
        };
        GameSnapshot {
            cells: self.grid.rows(),
            status,
            max_tile: self.grid.max_tile(),
            moves: 0,
        }
    }
}
