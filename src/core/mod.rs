//! Core value types: players, cells, coordinates, moves, the board, and
//! configuration.
//!
//! Nothing here knows the capture rules. `rules` builds on these types.

pub mod board;
pub mod config;
pub mod coord;
pub mod moves;
pub mod player;

pub use board::{Board, Cell};
pub use config::{GameConfig, DEFAULT_DIMENSION, MAX_DIMENSION, MIN_DIMENSION};
pub use coord::{Coord, Direction, Directions};
pub use moves::Move;
pub use player::{Player, PlayerMap};
