//! Board addressing: coordinates and ray directions.
//!
//! ## Coordinates
//!
//! Coordinates are 1-indexed `(x, y)` pairs: `x` is the column, `y` the row,
//! both in `[1, dimension]`. `(1, 1)` is the top-left cell. Zero never
//! addresses a cell; `Coord::step` refuses to produce one.
//!
//! ## Directions
//!
//! The eight unit vectors around a cell. `Direction::ALL` lists them in
//! canonical order (dx outer, dy inner, each over -1, 0, 1).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A 1-indexed board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    /// Create a coordinate. No bounds are checked here.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Check that both components lie in `[1, dimension]`.
    ///
    /// ```
    /// use rust_reversi::core::Coord;
    ///
    /// assert!(Coord::new(1, 8).in_bounds(8));
    /// assert!(!Coord::new(0, 4).in_bounds(8));
    /// assert!(!Coord::new(4, 9).in_bounds(8));
    /// ```
    #[must_use]
    pub const fn in_bounds(self, dimension: usize) -> bool {
        self.x >= 1 && self.x <= dimension && self.y >= 1 && self.y <= dimension
    }

    /// The neighbouring coordinate one step along `direction`.
    ///
    /// Returns `None` when a component would drop below 1. The upper bound
    /// depends on the board, so callers still check `in_bounds`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let x = self.x.checked_add_signed(isize::from(direction.dx))?;
        let y = self.y.checked_add_signed(isize::from(direction.dy))?;
        if x == 0 || y == 0 {
            return None;
        }
        Some(Coord { x, y })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// One of the eight rays leaving a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Direction {
    dx: i8,
    dy: i8,
}

impl Direction {
    pub const UP_LEFT: Direction = Direction { dx: -1, dy: -1 };
    pub const LEFT: Direction = Direction { dx: -1, dy: 0 };
    pub const DOWN_LEFT: Direction = Direction { dx: -1, dy: 1 };
    pub const UP: Direction = Direction { dx: 0, dy: -1 };
    pub const DOWN: Direction = Direction { dx: 0, dy: 1 };
    pub const UP_RIGHT: Direction = Direction { dx: 1, dy: -1 };
    pub const RIGHT: Direction = Direction { dx: 1, dy: 0 };
    pub const DOWN_RIGHT: Direction = Direction { dx: 1, dy: 1 };

    /// All eight directions in canonical evaluation order.
    pub const ALL: [Direction; 8] = [
        Direction::UP_LEFT,
        Direction::LEFT,
        Direction::DOWN_LEFT,
        Direction::UP,
        Direction::DOWN,
        Direction::UP_RIGHT,
        Direction::RIGHT,
        Direction::DOWN_RIGHT,
    ];

    /// Build a direction from a unit vector.
    ///
    /// Returns `None` for `(0, 0)` or any component outside `[-1, 1]`.
    #[must_use]
    pub const fn new(dx: i8, dy: i8) -> Option<Direction> {
        if dx < -1 || dx > 1 || dy < -1 || dy > 1 || (dx == 0 && dy == 0) {
            return None;
        }
        Some(Direction { dx, dy })
    }

    #[must_use]
    pub const fn dx(self) -> i8 {
        self.dx
    }

    #[must_use]
    pub const fn dy(self) -> i8 {
        self.dy
    }

    /// Position of this direction in `Direction::ALL`.
    #[must_use]
    pub const fn canonical_index(self) -> usize {
        let raw = ((self.dx + 1) * 3 + (self.dy + 1)) as usize;
        // (0, 0) sits at raw index 4 and is skipped.
        if raw > 4 {
            raw - 1
        } else {
            raw
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.dx, self.dy)
    }
}

/// Capturing directions for one cell.
///
/// The validator fills it in `Direction::ALL` order without repeats. At
/// most eight entries, so the inline buffer never spills.
pub type Directions = SmallVec<[Direction; 8]>;
