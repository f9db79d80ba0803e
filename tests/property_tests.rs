//! Property tests over random playouts.
//!
//! A playout starts from the standard opening and repeatedly picks one of
//! the legal moves for the side to move, passing when that side is stuck,
//! until neither side can move or the game is over.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rust_reversi::core::{Board, Cell, Coord, Direction, Player};
use rust_reversi::rules::applier::apply;
use rust_reversi::rules::status::check_over;
use rust_reversi::rules::validator::{capturing_directions, is_capturing, legal_moves};
use rust_reversi::{GameBuilder, GameStatus, MoveError};

/// Every board reached by a playout, starting with the opening.
fn playout(dimension: usize, choices: &[usize]) -> Vec<Board> {
    let mut board = Board::new(dimension);
    let mut player = Player::One;
    let mut boards = vec![board.clone()];

    for &choice in choices {
        if check_over(&board).is_over() {
            break;
        }
        let mut moves = legal_moves(&board, player);
        if moves.is_empty() {
            player = player.opponent();
            moves = legal_moves(&board, player);
            if moves.is_empty() {
                break;
            }
        }
        let mv = &moves[choice % moves.len()];
        apply(&mut board, mv);
        boards.push(board.clone());
        player = player.opponent();
    }

    boards
}

fn dimension_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![Just(4usize), Just(5usize), Just(6usize), Just(8usize)]
}

fn choices_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..64, 0..64)
}

fn occupied(board: &Board) -> usize {
    board.dimension() * board.dimension() - board.empty_count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Scores plus empty cells always cover the whole grid.
    #[test]
    fn prop_occupancy(dimension in dimension_strategy(), choices in choices_strategy()) {
        for board in playout(dimension, &choices) {
            let area = (dimension * dimension) as i64;
            prop_assert_eq!(
                board.score(Player::One) + board.score(Player::Two) + board.empty_count() as i64,
                area
            );
        }
    }

    /// Tracked scores match the discs on the grid.
    #[test]
    fn prop_scores_consistent(dimension in dimension_strategy(), choices in choices_strategy()) {
        for board in playout(dimension, &choices) {
            prop_assert!(board.scores_consistent());
            prop_assert_eq!(board.score(Player::One), board.count(Cell::Player1) as i64);
            prop_assert_eq!(board.score(Player::Two), board.count(Cell::Player2) as i64);
        }
    }

    /// Each move places one disc and converts `flipped` others, never
    /// emptying a cell.
    #[test]
    fn prop_monotonic_growth(dimension in dimension_strategy(), choices in choices_strategy()) {
        let boards = playout(dimension, &choices);
        for pair in boards.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            prop_assert_eq!(occupied(after), occupied(before) + 1);

            let changed = before
                .cells()
                .zip(after.cells())
                .filter(|((_, a), (_, b))| a != b)
                .count();
            // The placed disc plus every flipped one.
            prop_assert!(changed >= 2);
            for ((_, a), (_, b)) in before.cells().zip(after.cells()) {
                prop_assert!(a.is_empty() || !b.is_empty());
            }
        }
    }

    /// Applying a classified move reports exactly the discs that changed owner.
    #[test]
    fn prop_flipped_count_matches_board(
        dimension in dimension_strategy(),
        choices in choices_strategy(),
        pick in 0usize..64,
    ) {
        let boards = playout(dimension, &choices);
        let board = boards.last().cloned().unwrap_or_else(|| Board::new(dimension));
        for player in Player::ALL {
            let moves = legal_moves(&board, player);
            if moves.is_empty() {
                continue;
            }
            let mv = &moves[pick % moves.len()];
            let mut after = board.clone();
            let flipped = apply(&mut after, mv);

            let converted = board
                .cells()
                .zip(after.cells())
                .filter(|((_, a), (_, b))| !a.is_empty() && a != b)
                .count();
            prop_assert!(flipped >= 1);
            prop_assert_eq!(flipped, converted);
            prop_assert_eq!(after.score(player), board.score(player) + flipped as i64 + 1);
            prop_assert_eq!(
                after.score(player.opponent()),
                board.score(player.opponent()) - flipped as i64
            );
        }
    }

    /// A rejected `play` leaves board, player and turn exactly as they were,
    /// and the error names why.
    #[test]
    fn prop_rejected_play_changes_nothing(
        dimension in dimension_strategy(),
        choices in choices_strategy(),
        targets in prop::collection::vec((0usize..64, 0usize..64), 1..16),
    ) {
        let mut session = GameBuilder::new().dimension(dimension).build();
        for &choice in &choices {
            let moves = session.legal_moves();
            if moves.is_empty() {
                break;
            }
            session.play(moves[choice % moves.len()].coord()).unwrap();
        }

        for (x, y) in targets {
            let coord = Coord::new(x % dimension + 1, y % dimension + 1);
            let board = session.board().clone();
            let player = session.current_player();
            let turn = session.turn();

            let Err(err) = session.play(coord) else {
                continue;
            };

            prop_assert_eq!(session.board(), &board);
            prop_assert_eq!(session.current_player(), player);
            prop_assert_eq!(session.turn(), turn);
            if session.is_over() {
                prop_assert_eq!(err, MoveError::GameOver);
            } else if board.get(coord).is_empty() {
                prop_assert_eq!(err, MoveError::NoCapture(coord));
            } else {
                prop_assert_eq!(err, MoveError::OccupiedCell(coord));
            }
        }
    }

    /// Testing directions in any order finds the same capturing set.
    #[test]
    fn prop_direction_independence(
        dimension in dimension_strategy(),
        choices in choices_strategy(),
        order in Just(Direction::ALL.to_vec()).prop_shuffle(),
    ) {
        let boards = playout(dimension, &choices);
        let board = boards.last().cloned().unwrap_or_else(|| Board::new(dimension));

        for (coord, cell) in board.cells() {
            if !cell.is_empty() {
                continue;
            }
            for player in Player::ALL {
                let shuffled: BTreeSet<Direction> = order
                    .iter()
                    .copied()
                    .filter(|&d| is_capturing(&board, player, coord, d))
                    .collect();
                let canonical: BTreeSet<Direction> =
                    capturing_directions(&board, player, coord).into_iter().collect();
                prop_assert_eq!(shuffled, canonical);
            }
        }
    }

    /// A wiped-out Player 1 always loses, whatever Player 2 holds.
    #[test]
    fn prop_wipeout_decides_for_player_two(dimension in 2usize..=8, k in 1usize..=64) {
        let mut board = Board::empty(dimension);
        let k = k.min(dimension * dimension);
        let targets: Vec<Coord> = board.cells().take(k).map(|(coord, _)| coord).collect();
        for coord in targets {
            board.set(coord, Cell::Player2);
        }
        board.recount_scores();

        prop_assert_eq!(
            check_over(&board),
            GameStatus::Over(rust_reversi::GameResult::Winner(Player::Two))
        );
    }
}

#[test]
fn test_board_survives_json() {
    let boards = playout(8, &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
    let board = boards.last().unwrap();

    let json = serde_json::to_string(board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();

    assert_eq!(&restored, board);
    assert!(restored.scores_consistent());
}
