//! Logging setup for the terminal binary.
//!
//! The game owns the terminal (raw mode, alternate screen), so log records
//! can't go to stderr. They go to a file when one is configured and are
//! dropped otherwise. The filter comes from `RUST_LOG`, default `info`.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initialise the global logger. Safe to call more than once.
pub fn init(log_path: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    match log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder
                .filter_level(LevelFilter::Off)
                .target(Target::Pipe(Box::new(io::sink())));
        }
    }

    // A second init (tests, restarts) keeps the first logger.
    builder.try_init().ok();
    Ok(())
}
