//! Random fleet placement.

use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET, PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Try to place the whole fleet on `board` within `attempts` random
/// placements.
///
/// Bows are drawn from `0..=BOARD_SIZE` on both axes so that every ship
/// position is reachable; candidates that fall off the grid are rejected by
/// the board like any other bad placement. On failure the board holds a
/// partial fleet and should be discarded.
pub fn fill_fleet<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    attempts: usize,
) -> Result<(), BoardError> {
    let mut next = 0;
    for _ in 0..attempts {
        if next == FLEET.len() {
            break;
        }
        let bow = Coord::new(
            rng.random_range(0..=BOARD_SIZE),
            rng.random_range(0..=BOARD_SIZE),
        );
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        if board.add(Ship::new(FLEET[next], bow, orientation)) {
            next += 1;
        }
    }
    if next == FLEET.len() {
        Ok(())
    } else {
        Err(BoardError::UnableToPlaceShip)
    }
}

/// Build a board holding the full fleet, restarting from an empty board
/// whenever a round exhausts its attempt budget.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, concealed: bool) -> Board {
    let mut restarts = 0usize;
    loop {
        let mut board = Board::with_concealment(concealed);
        match fill_fleet(&mut board, rng, PLACEMENT_ATTEMPTS) {
            Ok(()) => {
                log::debug!("fleet placed after {} restarts", restarts);
                return board;
            }
            Err(e) => {
                restarts += 1;
                log::debug!("{}; restarting placement (restart {})", e, restarts);
            }
        }
    }
}
