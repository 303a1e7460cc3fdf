use crate::{
    board::Board,
    common::{PlayerError, ShotResult},
    coord::Coord,
};
use rand::rngs::SmallRng;

/// Interface implemented by the two sides of a match.
pub trait Player {
    /// Choose the next target. Called again with the same boards when the
    /// previous choice was a repeat.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Board,
        enemy: &Board,
    ) -> Result<Coord, PlayerError>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coord, _result: ShotResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coord, _result: ShotResult) {}
}
