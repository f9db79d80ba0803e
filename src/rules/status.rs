//! Terminal-state detection and winner determination.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{} wins", player),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// The two phases of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Over(GameResult),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over(_))
    }

    /// The result, if the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            GameStatus::Over(result) => Some(*result),
            GameStatus::InProgress => None,
        }
    }
}

/// Compare scores: the strictly higher score wins, equal scores draw.
#[must_use]
pub fn result_by_score(board: &Board) -> GameResult {
    let one = board.score(Player::One);
    let two = board.score(Player::Two);

    match one.cmp(&two) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
        std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}

/// Decide whether the game on `board` has ended.
///
/// Over when either player has no discs or every cell is occupied.
#[must_use]
pub fn check_over(board: &Board) -> GameStatus {
    let one = board.score(Player::One);
    let two = board.score(Player::Two);
    let area = (board.dimension() * board.dimension()) as i64;

    if one == 0 || two == 0 || one + two == area {
        GameStatus::Over(result_by_score(board))
    } else {
        GameStatus::InProgress
    }
}
