//! Common types: shot results and the error enums shared by the engine.

use alloc::string::String;
use core::fmt;

use crate::bitboard::BitBoardError;
use crate::coord::Coord;

/// Outcome of a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotResult {
    /// The cell was already resolved; nothing changed.
    Repeat,
    Miss,
    /// A ship took damage but is still afloat.
    Hit,
    /// The shot destroyed a ship.
    Kill,
}

impl ShotResult {
    /// Hits and kills earn the shooter another shot.
    pub fn keeps_turn(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Kill)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    BitBoardError(BitBoardError),
    /// Coordinate lies outside the grid.
    OutOfBounds(Coord),
    /// Part of the ship would leave the grid.
    ShipOutOfBounds,
    /// Ship overlaps or touches an already placed ship.
    ShipTooClose,
    /// The placement budget ran out before the fleet was complete.
    UnableToPlaceShip,
    /// A ship cell had no owning ship.
    UnknownShipHit(Coord),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds(at) => write!(f, "Coordinate {} is off the board", at),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipTooClose => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::UnknownShipHit(at) => write!(f, "No ship owns the hit cell {}", at),
        }
    }
}

/// Errors raised while an actor produces a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// The input source reached end of file.
    InputClosed,
    Io(String),
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::InputClosed => write!(f, "Input closed"),
            PlayerError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

/// Errors surfaced by the match controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    Player(PlayerError),
    /// A turn was requested after the match finished.
    GameOver,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<PlayerError> for GameError {
    fn from(err: PlayerError) -> Self {
        GameError::Player(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Player(e) => write!(f, "Player error: {}", e),
            GameError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
