//! Runtime configuration for the terminal game.
//!
//! Everything is read from environment variables; anything unset or
//! unparseable falls back to the default.
//!
//! - `TWENTY48_SEED`: seed for tile spawns (unset: OS entropy)
//! - `TWENTY48_LOG_PATH`: file to write logs to (unset: logging off)
//! - `TWENTY48_CELL_WIDTH` / `TWENTY48_CELL_HEIGHT`: tile size in terminal cells,
//!   clamped to 5..=64 by 1..=32

use std::path::PathBuf;

use crate::term::{MAX_CELL_H, MAX_CELL_W, MIN_CELL_W};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            cell_width: 7,
            cell_height: 3,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment, test fixtures, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let seed = parsed("TWENTY48_SEED");

        let log_path = lookup("TWENTY48_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let cell_width = parsed("TWENTY48_CELL_WIDTH")
            .and_then(|v| u16::try_from(v).ok())
            .unwrap_or(defaults.cell_width)
            .clamp(MIN_CELL_W, MAX_CELL_W);

        let cell_height = parsed("TWENTY48_CELL_HEIGHT")
            .and_then(|v| u16::try_from(v).ok())
            .unwrap_or(defaults.cell_height)
            .clamp(1, MAX_CELL_H);

        Self {
            seed,
            log_path,
            cell_width,
            cell_height,
        }
    }
}
