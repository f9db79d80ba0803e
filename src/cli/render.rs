//! Plain-text rendering of the board and score.

use crate::core::{Board, Player};

/// Render the grid with column indices on top and row indices down the left,
/// cells separated by `|`.
///
/// ```
/// use rust_reversi::cli::render::render_board;
/// use rust_reversi::core::Board;
///
/// let text = render_board(&Board::new(4));
/// assert_eq!(text.lines().next(), Some(" |1|2|3|4"));
/// assert_eq!(text.lines().nth(2), Some("2|-|X|O|-"));
/// ```
#[must_use]
pub fn render_board(board: &Board) -> String {
    let width = board.dimension().to_string().len();
    let mut lines = Vec::with_capacity(board.dimension() + 1);

    let mut header = vec![format!("{:>width$}", "")];
    header.extend((1..=board.dimension()).map(|x| format!("{:>width$}", x)));
    lines.push(header.join("|"));

    for (y, row) in board.rows().enumerate() {
        let mut fields = vec![format!("{:>width$}", y + 1)];
        fields.extend(row.iter().map(|cell| format!("{:>width$}", cell.symbol())));
        lines.push(fields.join("|"));
    }

    lines.join("\n")
}

/// Render the score line, e.g. `(X)2 : 2(O)`.
#[must_use]
pub fn render_score(board: &Board) -> String {
    format!(
        "({}){} : {}({})",
        Player::One.symbol(),
        board.score(Player::One),
        board.score(Player::Two),
        Player::Two.symbol()
    )
}
