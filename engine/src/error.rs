use thiserror::Error;

use crate::types::Player;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Position ({row}, {col}) is outside the 3x3 board")]
pub struct OutOfBounds {
    pub row: usize,
    pub col: usize,
}

/// Reasons a placement is refused. A refused placement leaves the game untouched.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PlaceMarkError {
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
    #[error("Cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },
    #[error("Not {player}'s turn")]
    NotYourTurn { player: Player },
    #[error("Round is over, waiting for restart")]
    RoundOver,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[source] serde_yaml_ng::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),
    #[error("Config validation error: {0}")]
    Invalid(String),
}
