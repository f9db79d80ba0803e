//! Parsing of typed player input.

use crate::core::{Coord, MAX_DIMENSION, MIN_DIMENSION};
use crate::error::InputError;

fn parse_positive(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    text.parse::<usize>()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

/// Parse a move typed as `x,y`.
///
/// Both components must be integers in `[1, dimension]`. Whether the cell is
/// a legal move is decided later by the rules.
///
/// ```
/// use rust_reversi::cli::input::parse_coord;
/// use rust_reversi::core::Coord;
///
/// assert_eq!(parse_coord(" 4, 6 ", 8), Ok(Coord::new(4, 6)));
/// assert!(parse_coord("4;6", 8).is_err());
/// ```
pub fn parse_coord(text: &str, dimension: usize) -> Result<Coord, InputError> {
    let mut parts = text.trim().split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Format);
    };

    let x = parse_positive(x)?;
    let y = parse_positive(y)?;
    if x == 0 || x > dimension {
        return Err(InputError::OutOfRange { axis: 'x', dimension });
    }
    if y == 0 || y > dimension {
        return Err(InputError::OutOfRange { axis: 'y', dimension });
    }

    Ok(Coord::new(x, y))
}

/// Parse a board dimension. Blank input selects `default`.
pub fn parse_dimension(text: &str, default: usize) -> Result<usize, InputError> {
    if text.trim().is_empty() {
        return Ok(default);
    }

    let dimension = parse_positive(text)?;
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
        return Err(InputError::DimensionRange {
            min: MIN_DIMENSION,
            max: MAX_DIMENSION,
        });
    }
    Ok(dimension)
}
