//! Grid coordinates.

use core::fmt;

use crate::config::BOARD_SIZE;

/// A position on the board, addressed by 0-based row and column.
///
/// Coordinates are plain values and may lie outside the grid; the board
/// decides whether a coordinate is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    /// Returns `true` when the coordinate lies on the 6×6 grid.
    pub const fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Shift by a signed delta, returning `None` if the result leaves the grid.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let moved = Coord::new(row, col);
        moved.in_bounds().then_some(moved)
    }

    /// The clipped 3×3 block centred on this coordinate, the cell itself
    /// included.
    pub fn neighborhood(&self) -> impl Iterator<Item = Coord> {
        let origin = *self;
        (-1isize..=1)
            .flat_map(move |dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter_map(move |(dr, dc)| origin.offset(dr, dc))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    /// 1-based, the way the player types coordinates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}
