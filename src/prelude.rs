//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, AiPlayer, Board, Coord, Game, GameStatus, Orientation, Player, Ship, ShotResult,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
