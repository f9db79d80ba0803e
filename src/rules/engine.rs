//! Rules engine trait.
//!
//! `RulesEngine` bundles the three stateless algorithms behind one seam:
//! - Which moves are legal (`classify`, `legal_moves`)
//! - How a move changes the board (`apply`)
//! - Whether the game has ended (`status`)
//!
//! Every method takes the board and player as plain arguments; an engine
//! holds no game state of its own.

use super::status::GameStatus;
use super::{applier, status, validator};
use crate::core::{Board, Coord, Move, Player};
use crate::error::MoveError;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `classify`: Must not mutate anything; rejection leaves the board as is
/// - `apply`: Only ever receives a `Move` produced by `classify`
/// - `status`: Returns `GameStatus::InProgress` while the game continues
pub trait RulesEngine {
    /// Validate a proposed move for `player` at `coord`.
    fn classify(&self, board: &Board, player: Player, coord: Coord) -> Result<Move, MoveError>;

    /// Commit a validated move. Returns the number of flipped discs.
    fn apply(&self, board: &mut Board, mv: &Move) -> usize;

    /// Check whether the game is over.
    fn status(&self, board: &Board) -> GameStatus;

    // === Convenience Methods ===

    /// Enumerate all legal moves for a player in row-major order.
    fn legal_moves(&self, board: &Board, player: Player) -> Vec<Move> {
        validator::scan_moves(board, |coord| self.classify(board, player, coord))
    }

    /// Check if a player has any legal move.
    fn has_legal_move(&self, board: &Board, player: Player) -> bool {
        !self.legal_moves(board, player).is_empty()
    }
}

/// Standard Reversi rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl RulesEngine for StandardRules {
    fn classify(&self, board: &Board, player: Player, coord: Coord) -> Result<Move, MoveError> {
        validator::classify(board, player, coord)
    }

    fn apply(&self, board: &mut Board, mv: &Move) -> usize {
        applier::apply(board, mv)
    }

    fn status(&self, board: &Board) -> GameStatus {
        status::check_over(board)
    }

    fn has_legal_move(&self, board: &Board, player: Player) -> bool {
        validator::has_legal_move(board, player)
    }
}
