//! The board: a square grid of cells plus per-player disc counts.
//!
//! `Board` is a pure container. It places the opening position and answers
//! bounds-checked reads and writes; keeping the counts in step with the grid
//! is the move applier's job.
//!
//! ## Addressing
//!
//! Every access goes through `get`/`set` with a 1-indexed `Coord`. Storage is
//! row-major (`grid[y][x]`) in a single flat `Vec`.
//!
//! ## Text form
//!
//! `Board` parses from rows of `-`, `X`, `O` (whitespace between cells is
//! ignored) and recounts scores from the grid:
//!
//! ```
//! use rust_reversi::core::{Board, Cell, Coord, Player};
//!
//! let board: Board = "X O\nO X".parse().unwrap();
//! assert_eq!(board.dimension(), 2);
//! assert_eq!(board.get(Coord::new(2, 1)), Cell::Player2);
//! assert_eq!(board.score(Player::One), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::coord::Coord;
use super::player::{Player, PlayerMap};
use crate::error::BoardParseError;

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player owning this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Display symbol: `-`, `X` or `O`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "-",
            Cell::Player1 => "X",
            Cell::Player2 => "O",
        }
    }

    fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '-' | '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Player1),
            'O' | 'o' => Some(Cell::Player2),
            _ => None,
        }
    }
}

/// Square game board with score bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    dimension: usize,
    /// Row-major cells: index `(y - 1) * dimension + (x - 1)`.
    grid: Vec<Cell>,
    /// Occupied-cell count per player. Signed so a bad update shows up as a
    /// negative count instead of wrapping.
    scores: PlayerMap<i64>,
}

impl Board {
    /// Create a board with the standard opening.
    ///
    /// With `c = dimension / 2`, `(c, c)` and `(c+1, c+1)` hold Player 1,
    /// `(c+1, c)` and `(c, c+1)` hold Player 2. Both scores start at 2.
    ///
    /// # Panics
    ///
    /// Panics if `dimension < 2`; the opening would fall off the grid.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        assert!(dimension >= 2, "Board dimension must be at least 2");

        let mut board = Self::empty(dimension);
        let c = dimension / 2;

        board.set(Coord::new(c, c), Cell::Player1);
        board.set(Coord::new(c + 1, c + 1), Cell::Player1);
        board.set(Coord::new(c + 1, c), Cell::Player2);
        board.set(Coord::new(c, c + 1), Cell::Player2);
        board.scores = PlayerMap::with_value(2);

        board
    }

    /// Create a board with every cell empty and both scores zero.
    ///
    /// # Panics
    ///
    /// Panics if `dimension == 0`.
    #[must_use]
    pub fn empty(dimension: usize) -> Self {
        assert!(dimension >= 1, "Board dimension must be at least 1");

        Self {
            dimension,
            grid: vec![Cell::Empty; dimension * dimension],
            scores: PlayerMap::with_value(0),
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Check whether `coord` addresses a cell of this board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.dimension)
    }

    fn offset(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "Coordinate {} is outside a {}x{} board",
            coord,
            self.dimension,
            self.dimension
        );
        (coord.y - 1) * self.dimension + (coord.x - 1)
    }

    /// Get the cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds. Callers check `contains` first.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        self.grid[self.offset(coord)]
    }

    /// Overwrite the cell at `coord`. Scores are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let offset = self.offset(coord);
        self.grid[offset] = cell;
    }

    // === Scores ===

    /// Number of cells held by `player`, as tracked.
    #[must_use]
    pub fn score(&self, player: Player) -> i64 {
        self.scores[player]
    }

    /// Both tracked scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<i64> {
        &self.scores
    }

    /// Shift a player's tracked score by `delta`.
    pub(crate) fn adjust_score(&mut self, player: Player, delta: i64) {
        self.scores[player] += delta;
    }

    /// Recompute both scores by scanning the grid.
    pub fn recount_scores(&mut self) {
        self.scores = PlayerMap::new(|p| self.count(p.cell()) as i64);
    }

    /// Check that each tracked score equals the number of cells the player holds.
    #[must_use]
    pub fn scores_consistent(&self) -> bool {
        Player::ALL
            .iter()
            .all(|&p| self.scores[p] == self.count(p.cell()) as i64)
    }

    // === Occupancy ===

    /// Count cells equal to `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.grid.iter().filter(|&&c| c == cell).count()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.count(Cell::Empty)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.grid.iter().all(|c| !c.is_empty())
    }

    /// Iterate over every `(Coord, Cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let dimension = self.dimension;
        self.grid
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i % dimension + 1, i / dimension + 1), cell))
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.chunks(self.dimension)
    }
}

/// Serialized form, checked before it becomes a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    dimension: usize,
    grid: Vec<Cell>,
    scores: PlayerMap<i64>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardParseError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.dimension == 0 {
            return Err(BoardParseError::Empty);
        }
        if raw.grid.len() != raw.dimension * raw.dimension {
            return Err(BoardParseError::GridSize {
                len: raw.grid.len(),
                expected: raw.dimension * raw.dimension,
            });
        }

        let board = Board {
            dimension: raw.dimension,
            grid: raw.grid,
            scores: raw.scores,
        };
        if !board.scores_consistent() {
            return Err(BoardParseError::ScoreMismatch);
        }
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<Cell>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| {
                        Cell::from_symbol(c).ok_or(BoardParseError::UnknownSymbol {
                            symbol: c,
                            row: row + 1,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<_, _>>()?;

        let dimension = rows.len();
        if dimension == 0 {
            return Err(BoardParseError::Empty);
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != dimension) {
            return Err(BoardParseError::NotSquare {
                row: row + 1,
                len: cells.len(),
                dimension,
            });
        }

        let mut board = Board {
            dimension,
            grid: rows.into_iter().flatten().collect(),
            scores: PlayerMap::with_value(0),
        };
        board.recount_scores();
        Ok(board)
    }
}
