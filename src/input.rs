//! Parsing of typed shot coordinates.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::coord::Coord;

/// Why a line of input could not be turned into a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two whitespace-separated integers.
    InvalidFormat,
    /// A value outside `1..=6`.
    OutOfBounds,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidFormat => {
                write!(f, "Input error: enter the row and column as two numbers, e.g. `2 5`")
            }
            InputError::OutOfBounds => write!(
                f,
                "Shot is off the map: row and column must be between 1 and {}",
                BOARD_SIZE
            ),
        }
    }
}

/// Parse a 1-based `row col` pair into a 0-based coordinate.
pub fn parse_target(line: &str) -> Result<Coord, InputError> {
    let mut parts = line.split_whitespace();
    let (row, col) = match (parts.next(), parts.next(), parts.next()) {
        (Some(r), Some(c), None) => (r, c),
        _ => return Err(InputError::InvalidFormat),
    };
    let row: i64 = row.parse().map_err(|_| InputError::InvalidFormat)?;
    let col: i64 = col.parse().map_err(|_| InputError::InvalidFormat)?;
    let valid = 1..=BOARD_SIZE as i64;
    if !valid.contains(&row) || !valid.contains(&col) {
        return Err(InputError::OutOfBounds);
    }
    Ok(Coord::new(row as usize - 1, col as usize - 1))
}
