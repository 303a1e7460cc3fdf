use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{GameError, ShotResult},
    coord::Coord,
    player::Player,
};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    PlayerTurn,
    OpponentTurn,
    PlayerWon,
    OpponentWon,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::PlayerWon | GameStatus::OpponentWon)
    }

    /// Side whose turn it is, if the match is still running.
    pub fn active_side(self) -> Option<Side> {
        match self {
            GameStatus::PlayerTurn => Some(Side::Player),
            GameStatus::OpponentTurn => Some(Side::Opponent),
            _ => None,
        }
    }

    /// Closing line shown to the human player.
    pub fn outcome_message(self) -> Option<&'static str> {
        match self {
            GameStatus::PlayerWon => Some("Congratulations, you won!"),
            GameStatus::OpponentWon => Some("You lost."),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    fn turn(self) -> GameStatus {
        match self {
            Side::Player => GameStatus::PlayerTurn,
            Side::Opponent => GameStatus::OpponentTurn,
        }
    }
}

/// What happened during one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: Side,
    pub target: Coord,
    /// Miss, Hit or Kill; repeats are retried, never reported.
    pub result: ShotResult,
    /// Targets rejected as repeats before this one landed.
    pub repeats: usize,
}

/// Match controller: owns both boards and both players and alternates turns
/// until one fleet is gone.
pub struct Game {
    player_board: Board,
    opponent_board: Board,
    player: Box<dyn Player>,
    opponent: Box<dyn Player>,
    status: GameStatus,
    shots_fired: usize,
}

impl Game {
    /// `player` shoots at `opponent_board` and vice versa. The player moves
    /// first.
    pub fn new(
        player_board: Board,
        opponent_board: Board,
        player: Box<dyn Player>,
        opponent: Box<dyn Player>,
    ) -> Self {
        let mut game = Self {
            player_board,
            opponent_board,
            player,
            opponent,
            status: GameStatus::PlayerTurn,
            shots_fired: 0,
        };
        game.check_fleets();
        game
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    pub fn opponent_board_mut(&mut self) -> &mut Board {
        &mut self.opponent_board
    }

    /// Shots that resolved to a miss, hit or kill.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Play one shot for the active side, asking again for as long as it picks
    /// cells that were already resolved.
    pub fn step(&mut self, rng: &mut SmallRng) -> Result<ShotReport, GameError> {
        let side = self.status.active_side().ok_or(GameError::GameOver)?;
        let (shooter, victim, own, enemy) = match side {
            Side::Player => (
                &mut self.player,
                &mut self.opponent,
                &self.player_board,
                &mut self.opponent_board,
            ),
            Side::Opponent => (
                &mut self.opponent,
                &mut self.player,
                &self.opponent_board,
                &mut self.player_board,
            ),
        };

        let mut repeats = 0;
        let (target, result) = loop {
            let target = shooter.select_target(rng, own, enemy)?;
            let result = enemy.shot(target)?;
            shooter.handle_shot_result(target, result);
            if result != ShotResult::Repeat {
                break (target, result);
            }
            repeats += 1;
        };
        victim.handle_opponent_shot(target, result);
        self.shots_fired += 1;

        self.status = if result.keeps_turn() {
            side.turn()
        } else {
            log::debug!("{:?} missed at {}, turn passes", side, target);
            side.other().turn()
        };
        self.check_fleets();
        if self.status.is_over() {
            log::info!("game over after {} shots: {:?}", self.shots_fired, self.status);
        }

        Ok(ShotReport {
            shooter: side,
            target,
            result,
            repeats,
        })
    }

    /// Play until one side has no ships left.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<GameStatus, GameError> {
        log::info!("game started");
        while !self.status.is_over() {
            self.step(rng)?;
        }
        Ok(self.status)
    }

    fn check_fleets(&mut self) {
        if !self.opponent_board.has_live_ships() {
            self.status = GameStatus::PlayerWon;
        } else if !self.player_board.has_live_ships() {
            self.status = GameStatus::OpponentWon;
        }
    }
}
