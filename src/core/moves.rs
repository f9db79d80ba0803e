//! Move representation: a coordinate plus its capturing directions.
//!
//! A `Move` is the output of validation and the input of application. Only
//! the validator constructs one, so a `Move` in hand always carries at least
//! one capturing direction computed for its exact player and coordinate.

use serde::Serialize;

use super::coord::{Coord, Direction, Directions};
use super::player::Player;

/// A validated, not yet applied move.
///
/// ## Example
///
/// ```
/// use rust_reversi::core::{Board, Coord, Direction, Player};
/// use rust_reversi::rules::validator;
///
/// let board = Board::new(8);
/// let mv = validator::classify(&board, Player::One, Coord::new(4, 6)).unwrap();
///
/// assert_eq!(mv.coord(), Coord::new(4, 6));
/// assert_eq!(mv.directions(), &[Direction::UP]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    player: Player,
    coord: Coord,
    /// Capturing rays, canonical order, never empty.
    directions: Directions,
}

impl Move {
    pub(crate) fn new(player: Player, coord: Coord, directions: Directions) -> Self {
        debug_assert!(!directions.is_empty(), "A move needs a capturing direction");
        Self {
            player,
            coord,
            directions,
        }
    }

    /// The acting player.
    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Target cell.
    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Capturing directions in canonical order.
    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Check whether this move captures along `direction`.
    #[must_use]
    pub fn captures_toward(&self, direction: Direction) -> bool {
        self.directions.contains(&direction)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {} capturing", self.player, self.coord)?;
        for direction in &self.directions {
            write!(f, " {}", direction)?;
        }
        Ok(())
    }
}
