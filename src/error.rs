//! Error type shared by the engine, the seeding step and the demo front ends.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while building, seeding or driving a board.
///
/// The stepper and the rule engine never fail; these variants only cover
/// construction, placement, configuration and output.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("board size must be at least 1, got {size}")]
    InvalidBoardSize { size: usize },

    #[error("position ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: isize, col: isize, size: usize },

    #[error("{pattern} anchored at ({row}, {col}) does not fit on a {size}x{size} board")]
    PatternOutOfBounds {
        pattern: &'static str,
        row: usize,
        col: usize,
        size: usize,
    },

    #[error("{pattern} cannot be placed anywhere on a {size}x{size} board")]
    PatternDoesNotFit { pattern: &'static str, size: usize },

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to write frame")]
    Render(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
