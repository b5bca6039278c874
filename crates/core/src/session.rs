//! Turn controller: turns player actions into engine calls.
//!
//! Each directional input goes through the same gate:
//!
//! 1. a won game accepts no more moves
//! 2. a grid with no valid move is lost
//! 3. a direction that would change nothing is ignored
//! 4. otherwise the move is applied and one tile is spawned
//!
//! The status is refreshed right after each applied move too, so a view can
//! show the win or loss without waiting for another key press.

use log::{debug, info, trace};

use crate::engine::GameEngine;
use crate::snapshot::{GameSnapshot, SessionStatus};
use crate::spawn::{SeededSpawner, TileSpawner};
use crate::types::{Direction, GameAction};

/// What a single action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The move was applied; `spawned` is the cell that got a new tile.
    Moved {
        direction: Direction,
        spawned: Option<usize>,
    },
    /// The direction would not change the grid. Nothing happened.
    Ignored,
    /// The game is won; moves are no longer accepted.
    Won,
    /// No direction changes the grid.
    Lost,
    Restarted,
}

/// A game in progress: the engine plus the player-facing status.
#[derive(Debug, Clone)]
pub struct GameSession<S: TileSpawner = SeededSpawner> {
    engine: GameEngine<S>,
    status: SessionStatus,
    moves: u32,
}

impl GameSession<SeededSpawner> {
    /// Seeded session, or an entropy-seeded one when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_engine(GameEngine::new(seed)),
            None => Self::from_engine(GameEngine::from_entropy()),
        }
    }
}

impl<S: TileSpawner> GameSession<S> {
    pub fn from_engine(engine: GameEngine<S>) -> Self {
        let mut session = Self {
            engine,
            status: SessionStatus::Playing,
            moves: 0,
        };
        session.refresh_status();
        session
    }

    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Number of moves applied since the last restart.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn handle(&mut self, action: GameAction) -> TurnOutcome {
        match action {
            GameAction::Restart => {
                self.engine.reset();
                self.moves = 0;
                self.status = SessionStatus::Playing;
                info!("game restarted");
                TurnOutcome::Restarted
            }
            GameAction::Move(direction) => self.play(direction),
        }
    }

    fn play(&mut self, direction: Direction) -> TurnOutcome {
        if self.status == SessionStatus::Won || self.engine.has_won() {
            self.status = SessionStatus::Won;
            return TurnOutcome::Won;
        }

        let valid = self.engine.valid_moves();
        if valid.is_empty() {
            self.status = SessionStatus::Lost;
            return TurnOutcome::Lost;
        }
        if !valid.contains(&direction) {
            trace!("ignoring {direction}: grid would not change");
            return TurnOutcome::Ignored;
        }

        self.engine.apply_move(direction);
        let spawned = self.engine.add_new_tile();
        self.moves += 1;
        debug!("move #{} {direction}", self.moves);
        self.refresh_status();

        TurnOutcome::Moved { direction, spawned }
    }

    fn refresh_status(&mut self) {
        let next = if self.engine.has_won() {
            SessionStatus::Won
        } else if self.engine.is_stuck() {
            SessionStatus::Lost
        } else {
            SessionStatus::Playing
        };
        if next != self.status {
            match next {
                SessionStatus::Won => info!("2048 reached after {} moves", self.moves),
                SessionStatus::Lost => info!(
                    "no moves left after {} moves, max tile {}",
                    self.moves,
                    self.engine.max_tile()
                ),
                SessionStatus::Playing => {}
            }
        }
        self.status = next;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            moves: self.moves,
            ..self.engine.snapshot()
        }
    }
}
