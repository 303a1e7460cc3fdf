use crate::{
    board::Board,
    common::PlayerError,
    config::BOARD_SIZE,
    coord::Coord,
};
use rand::{rngs::SmallRng, Rng};

use crate::player::Player;

/// Computer opponent that fires uniformly at random and remembers nothing.
/// Repeats are left to the board to reject.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _own: &Board,
        _enemy: &Board,
    ) -> Result<Coord, PlayerError> {
        Ok(Coord::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        ))
    }
}
