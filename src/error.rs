//! Error types for moves, typed input, board text, configuration, and the
//! terminal binary.

use std::path::PathBuf;

use crate::core::Coord;

/// Reasons a proposed move is rejected. None of these mutate the board; the
/// turn loop re-prompts the same player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {0} is already filled")]
    OccupiedCell(Coord),

    #[error("invalid move: {0} captures nothing")]
    NoCapture(Coord),

    #[error("cell {coord} is outside the {dimension}x{dimension} board")]
    OutOfBounds { coord: Coord, dimension: usize },

    #[error("the game is already over")]
    GameOver,
}

impl MoveError {
    /// Check whether the move was rejected by the capture rules (as opposed to
    /// being addressed to a bad cell or a finished game).
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, MoveError::OccupiedCell(_) | MoveError::NoCapture(_))
    }
}

/// Errors from parsing player input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("invalid input, expected x,y")]
    Format,

    #[error("please input a positive integer, got {0:?}")]
    NotANumber(String),

    #[error("{axis} must be between 1-{dimension}")]
    OutOfRange { axis: char, dimension: usize },

    #[error("dimension must be between {min} and {max}")]
    DimensionRange { min: usize, max: usize },
}

/// Errors from building a board out of text or serialized data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("board text has no rows")]
    Empty,

    #[error("row {row} has {len} cells, expected {dimension}")]
    NotSquare {
        row: usize,
        len: usize,
        dimension: usize,
    },

    #[error("unknown cell symbol {symbol:?} in row {row}")]
    UnknownSymbol { symbol: char, row: usize },

    #[error("grid has {len} cells, expected {expected}")]
    GridSize { len: usize, expected: usize },

    #[error("stored scores do not match the grid")]
    ScoreMismatch,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that end the terminal session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
