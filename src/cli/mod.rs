//! Terminal collaborators: arguments, typed input, and printing the board.
//!
//! None of these modules knows the rules. Input parsing only checks shape and
//! range; legality is decided by `rules`.

pub mod args;
pub mod input;
pub mod render;
pub mod terminal;
