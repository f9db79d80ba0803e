//! Turn alternation over one board.
//!
//! A `GameSession` runs the validate-then-apply cycle for whichever player is
//! to move, passes the turn when the opponent has no legal move, and ends
//! the game when neither player can move.

mod session;

pub use session::{GameBuilder, GameSession, TurnReport};
