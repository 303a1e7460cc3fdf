//! Ship definitions and damage tracking.

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Extends along the row: `(row, col + i)`.
    Horizontal,
    /// Extends down the column: `(row + i, col)`.
    Vertical,
}

/// A straight ship anchored at its bow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    bow: Coord,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// Build an undamaged ship. No bounds checks happen here; the board
    /// rejects ships that leave the grid.
    pub const fn new(length: usize, bow: Coord, orientation: Orientation) -> Self {
        Self {
            length,
            bow,
            orientation,
            health: length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged segments left.
    pub fn health(&self) -> usize {
        self.health
    }

    /// The `length` cells covered by the ship, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (bow, orientation) = (self.bow, self.orientation);
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(bow.row(), bow.col() + i),
            Orientation::Vertical => Coord::new(bow.row() + i, bow.col()),
        })
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.cells().any(|c| c == at)
    }

    /// Take one point of damage. Returns `true` once the ship is destroyed.
    pub fn register_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.is_sunk()
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }
}
