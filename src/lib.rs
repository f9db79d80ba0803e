//! # rust-reversi
//!
//! A Reversi/Othello board engine on a square grid of configurable size.
//!
//! ## Design Principles
//!
//! 1. **Pure container**: `Board` holds cells and counts and exposes
//!    bounds-checked `get`/`set`. It knows nothing about captures.
//!
//! 2. **Stateless rules**: validation, application and terminal detection
//!    take `(board, player, coord)` as plain arguments.
//!
//! 3. **Validated moves only**: a `Move` can only come out of the validator,
//!    so the applier never sees a move without a capturing direction.
//!
//! ## Modules
//!
//! - `core`: Players, cells, coordinates, directions, moves, board, configuration
//! - `rules`: Move validation, move application, game status, `RulesEngine`
//! - `game`: Turn-taking session with pass handling
//! - `cli`: Arguments, input parsing, rendering and the turn loop for the terminal binary
//! - `error`: Structured error types

pub mod cli;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Coord, Direction, Directions, GameConfig, Move, Player, PlayerMap};

pub use crate::error::{BoardParseError, ConfigError, InputError, MoveError};

pub use crate::game::{GameBuilder, GameSession, TurnReport};

pub use crate::rules::{GameResult, GameStatus, RulesEngine, StandardRules};
