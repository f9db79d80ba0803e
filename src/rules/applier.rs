//! Move application: place the disc, flip sandwiched runs, update scores.
//!
//! Application trusts the `Move` it is given and does not re-validate. Each
//! ray is still walked to its terminating own cell before anything is
//! flipped, so a direction that no longer captures (a move validated against
//! an older board) flips nothing instead of leaving a half-flipped run.

use smallvec::SmallVec;

use crate::core::{Board, Coord, Direction, Move, Player};

/// The opponent cells flipped by `player` along one ray, nearest first.
///
/// Empty unless the run is closed by a cell of `player` on the board.
fn sandwiched_run(
    board: &Board,
    player: Player,
    coord: Coord,
    direction: Direction,
) -> SmallVec<[Coord; 8]> {
    let own = player.cell();
    let opponent = player.opponent().cell();

    let mut run = SmallVec::new();
    let mut cursor = coord;
    while let Some(next) = cursor.step(direction).filter(|&c| board.contains(c)) {
        let cell = board.get(next);
        if cell == opponent {
            run.push(next);
            cursor = next;
        } else if cell == own {
            return run;
        } else {
            break;
        }
    }
    SmallVec::new()
}

/// Commit `mv` to `board` and return how many discs were flipped.
///
/// Scores move by `flipped + 1` for the mover and `-flipped` for the
/// opponent.
pub fn apply(board: &mut Board, mv: &Move) -> usize {
    let player = mv.player();
    let coord = mv.coord();

    board.set(coord, player.cell());

    let mut flipped = 0usize;
    for &direction in mv.directions() {
        let run = sandwiched_run(board, player, coord, direction);
        tracing::trace!(%coord, %direction, count = run.len(), "flipping run");
        for &cell in &run {
            board.set(cell, player.cell());
        }
        flipped += run.len();
    }

    let delta = flipped as i64;
    board.adjust_score(player, delta + 1);
    board.adjust_score(player.opponent(), -delta);

    debug_assert!(board.scores_consistent(), "Scores drifted from the grid");
    flipped
}
