//! Game board state: cells, live ships and the placement exclusion zone.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotResult};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::ship::Ship;

pub type BB = BitBoard<u64, BOARD_SIZE>;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// Undamaged ship segment.
    Ship,
    Miss,
    /// Damaged segment of a ship that is still afloat.
    Hit,
    /// Segment of a destroyed ship.
    Sunk,
    /// Water around a destroyed ship, treated as already shot.
    Buffer,
}

impl Cell {
    /// Cells that have already been shot, directly or by a sinking contour.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Miss | Cell::Hit | Cell::Sunk | Cell::Buffer)
    }

    /// Glyph used by the text rendering. Concealed ship segments look like
    /// open water.
    pub fn glyph(self, concealed: bool) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ship if concealed => '.',
            Cell::Ship => '■',
            Cell::Miss => 'o',
            Cell::Hit => 'X',
            Cell::Sunk => '#',
            Cell::Buffer => '-',
        }
    }
}

/// One side's board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
    exclusion: BB,
    concealed: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board whose ships are shown when rendered.
    pub fn new() -> Self {
        Self::with_concealment(false)
    }

    /// Create an empty board whose undamaged ships render as water.
    pub fn new_concealed() -> Self {
        Self::with_concealment(true)
    }

    pub fn with_concealment(concealed: bool) -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            exclusion: BB::new(),
            concealed,
        }
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// State of the cell at `at`, or `None` off the grid.
    pub fn cell(&self, at: Coord) -> Option<Cell> {
        at.in_bounds().then(|| self.cells[at.row()][at.col()])
    }

    /// Ships still afloat.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn has_live_ships(&self) -> bool {
        !self.ships.is_empty()
    }

    /// Cells where no further ship may be placed.
    pub fn exclusion(&self) -> BB {
        self.exclusion
    }

    /// Place a ship. Returns `false`, leaving the board untouched, if any
    /// segment is off the grid or inside the exclusion zone.
    pub fn add(&mut self, ship: Ship) -> bool {
        self.try_add(ship).is_ok()
    }

    /// Place a ship, reporting why a rejected placement failed.
    pub fn try_add(&mut self, ship: Ship) -> Result<(), BoardError> {
        for at in ship.cells() {
            if !at.in_bounds() {
                log::trace!("rejecting {:?}: {} is off the board", ship, at);
                return Err(BoardError::ShipOutOfBounds);
            }
            if self.exclusion.get(at)? {
                log::trace!("rejecting {:?}: {} is too close to a ship", ship, at);
                return Err(BoardError::ShipTooClose);
            }
        }
        for at in ship.cells() {
            self.cells[at.row()][at.col()] = Cell::Ship;
            for near in at.neighborhood() {
                self.exclusion.set(near)?;
            }
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve a shot at `at`.
    pub fn shot(&mut self, at: Coord) -> Result<ShotResult, BoardError> {
        if !at.in_bounds() {
            return Err(BoardError::OutOfBounds(at));
        }
        match self.cells[at.row()][at.col()] {
            Cell::Miss | Cell::Hit | Cell::Sunk | Cell::Buffer => Ok(ShotResult::Repeat),
            Cell::Empty => {
                self.cells[at.row()][at.col()] = Cell::Miss;
                Ok(ShotResult::Miss)
            }
            Cell::Ship => {
                self.cells[at.row()][at.col()] = Cell::Hit;
                let idx = self
                    .ships
                    .iter()
                    .position(|s| s.contains(at))
                    .ok_or(BoardError::UnknownShipHit(at))?;
                if self.ships[idx].register_hit() {
                    let ship = self.ships.remove(idx);
                    self.sink(&ship);
                    log::debug!("{:?} destroyed, {} ships left", ship, self.ships.len());
                    Ok(ShotResult::Kill)
                } else {
                    Ok(ShotResult::Hit)
                }
            }
        }
    }

    fn sink(&mut self, ship: &Ship) {
        for at in ship.cells() {
            self.cells[at.row()][at.col()] = Cell::Sunk;
        }
        for at in ship.cells() {
            for near in at.neighborhood() {
                let cell = &mut self.cells[near.row()][near.col()];
                if matches!(*cell, Cell::Empty | Cell::Miss) {
                    *cell = Cell::Buffer;
                }
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {} |", c + 1)?;
        }
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "\n{} |", r + 1)?;
            for cell in row {
                write!(f, " {} |", cell.glyph(self.concealed))?;
            }
        }
        Ok(())
    }
}
