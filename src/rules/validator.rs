//! Move validation: the directional sandwich search.
//!
//! A ray from a candidate cell captures when it crosses one or more
//! contiguous opponent cells and then reaches a cell of the acting player
//! without leaving the board. A move is legal when its target is empty and
//! at least one of the eight rays captures.
//!
//! Each ray is tested independently, so the result does not depend on
//! evaluation order. Directions are always reported in canonical order.

use crate::core::{Board, Cell, Coord, Direction, Directions, Move, Player};
use crate::error::MoveError;

/// Check whether the ray from `coord` along `direction` captures for `player`.
///
/// Only the cells beyond `coord` are examined; the target itself may be in
/// any state.
#[must_use]
pub fn is_capturing(board: &Board, player: Player, coord: Coord, direction: Direction) -> bool {
    let own = player.cell();
    let opponent = player.opponent().cell();

    let mut crossed = 0usize;
    let mut cursor = coord;
    loop {
        cursor = match cursor.step(direction) {
            Some(next) if board.contains(next) => next,
            _ => return false,
        };

        match board.get(cursor) {
            c if c == opponent => crossed += 1,
            c if c == own => return crossed > 0,
            _ => return false,
        }
    }
}

/// Collect every capturing direction for `player` at `coord`.
///
/// Empty when the target is occupied or out of bounds, or when nothing is
/// sandwiched.
#[must_use]
pub fn capturing_directions(board: &Board, player: Player, coord: Coord) -> Directions {
    if !board.contains(coord) || board.get(coord) != Cell::Empty {
        return Directions::new();
    }

    Direction::ALL
        .into_iter()
        .filter(|&d| is_capturing(board, player, coord, d))
        .collect()
}

/// Classify a proposed move.
///
/// Returns the validated `Move` when legal. Rejections tell an occupied
/// target apart from an empty one that captures nothing.
pub fn classify(board: &Board, player: Player, coord: Coord) -> Result<Move, MoveError> {
    if !board.contains(coord) {
        return Err(MoveError::OutOfBounds {
            coord,
            dimension: board.dimension(),
        });
    }
    if board.get(coord) != Cell::Empty {
        return Err(MoveError::OccupiedCell(coord));
    }

    let directions = capturing_directions(board, player, coord);
    if directions.is_empty() {
        return Err(MoveError::NoCapture(coord));
    }

    Ok(Move::new(player, coord, directions))
}

/// Run `classify` over every empty cell in row-major order, keeping the
/// accepted moves.
pub(crate) fn scan_moves(
    board: &Board,
    mut classify: impl FnMut(Coord) -> Result<Move, MoveError>,
) -> Vec<Move> {
    board
        .cells()
        .filter(|(_, cell)| cell.is_empty())
        .filter_map(|(coord, _)| classify(coord).ok())
        .collect()
}

/// Every legal move for `player`, scanning rows top to bottom and each row
/// left to right.
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    scan_moves(board, |coord| classify(board, player, coord))
}

/// Check whether `player` has at least one legal move.
#[must_use]
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board.cells().any(|(coord, cell)| {
        cell.is_empty()
            && Direction::ALL
                .into_iter()
                .any(|d| is_capturing(board, player, coord, d))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_legal_move() {
        let board = Board::new(8);
        let mv = classify(&board, Player::One, Coord::new(4, 6)).unwrap();

        assert_eq!(mv.player(), Player::One);
        assert_eq!(mv.directions(), &[Direction::UP]);
    }

    #[test]
    fn test_occupied_target() {
        let board = Board::new(8);
        assert_eq!(
            classify(&board, Player::One, Coord::new(4, 4)),
            Err(MoveError::OccupiedCell(Coord::new(4, 4)))
        );
        assert!(capturing_directions(&board, Player::One, Coord::new(4, 4)).is_empty());
    }

    #[test]
    fn test_isolated_target_captures_nothing() {
        let board = Board::new(8);
        assert_eq!(
            classify(&board, Player::One, Coord::new(1, 1)),
            Err(MoveError::NoCapture(Coord::new(1, 1)))
        );
    }

    #[test]
    fn test_out_of_bounds_target() {
        let board = Board::new(8);
        assert_eq!(
            classify(&board, Player::One, Coord::new(9, 4)),
            Err(MoveError::OutOfBounds {
                coord: Coord::new(9, 4),
                dimension: 8
            })
        );
    }

    #[test]
    fn test_adjacent_own_cell_does_not_capture() {
        let board: Board = "
            - - - -
            - X X -
            - - - -
            - - - -
        "
        .parse()
        .unwrap();
        assert!(!is_capturing(&board, Player::One, Coord::new(1, 2), Direction::RIGHT));
    }

    #[test]
    fn test_run_off_board_does_not_capture() {
        let board: Board = "
            - O O O
            - - - -
            - - - -
            - - - -
        "
        .parse()
        .unwrap();
        assert!(!is_capturing(&board, Player::One, Coord::new(1, 1), Direction::RIGHT));
    }

    #[test]
    fn test_run_ending_in_empty_does_not_capture() {
        let board: Board = "
            - O O - X
            - - - - -
            - - - - -
            - - - - -
            - - - - -
        "
        .parse()
        .unwrap();
        assert!(!is_capturing(&board, Player::One, Coord::new(1, 1), Direction::RIGHT));
    }

    #[test]
    fn test_long_run_captures() {
        let board: Board = "
            - O O O X
            - - - - -
            - - - - -
            - - - - -
            - - - - -
        "
        .parse()
        .unwrap();
        assert!(is_capturing(&board, Player::One, Coord::new(1, 1), Direction::RIGHT));
        assert!(!is_capturing(&board, Player::Two, Coord::new(1, 1), Direction::RIGHT));
    }

    #[test]
    fn test_multiple_directions_in_canonical_order() {
        let board: Board = "
            X - X - -
            - O O - -
            X O - - -
            - - - - -
            - - - - -
        "
        .parse()
        .unwrap();

        let directions = capturing_directions(&board, Player::One, Coord::new(3, 3));
        assert_eq!(
            directions.as_slice(),
            &[Direction::UP_LEFT, Direction::LEFT, Direction::UP]
        );
    }

    #[test]
    fn test_opening_legal_moves() {
        let board = Board::new(8);
        let coords: Vec<Coord> = legal_moves(&board, Player::One)
            .iter()
            .map(Move::coord)
            .collect();

        assert_eq!(
            coords,
            vec![
                Coord::new(5, 3),
                Coord::new(6, 4),
                Coord::new(3, 5),
                Coord::new(4, 6),
            ]
        );
        assert!(has_legal_move(&board, Player::Two));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::new(2);
        assert!(legal_moves(&board, Player::One).is_empty());
        assert!(!has_legal_move(&board, Player::Two));
    }
}
