//! Reversi rules: validation, application, and terminal detection.
//!
//! - `validator`: the sandwich search deciding legality and capturing directions
//! - `applier`: commits a validated move and keeps scores in step
//! - `status`: decides when the game is over and who won
//!
//! `RulesEngine` puts the three behind one trait for the turn loop.

pub mod applier;
pub mod engine;
pub mod status;
pub mod validator;

pub use engine::{RulesEngine, StandardRules};
pub use status::{GameResult, GameStatus};
