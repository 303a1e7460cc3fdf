#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::string::{String, ToString};

use crate::{
    board::Board,
    common::{PlayerError, ShotResult},
    coord::Coord,
    input::parse_target,
    player::Player,
    ui,
};
use rand::rngs::SmallRng;

/// Human player reading shots as `row col` lines from `input` and writing
/// prompts and reports to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player driven by the terminal.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a line parses into an on-board coordinate.
    pub fn read_target(&mut self) -> Result<Coord, PlayerError> {
        loop {
            write!(self.output, "Your move (row col): ").map_err(io_error)?;
            self.output.flush().map_err(io_error)?;
            let mut line = String::new();
            if self.input.read_line(&mut line).map_err(io_error)? == 0 {
                return Err(PlayerError::InputClosed);
            }
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, "{e}").map_err(io_error)?,
            }
        }
    }
}

fn io_error(e: io::Error) -> PlayerError {
    PlayerError::Io(e.to_string())
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        own: &Board,
        enemy: &Board,
    ) -> Result<Coord, PlayerError> {
        ui::write_boards(&mut self.output, own, enemy).map_err(io_error)?;
        self.read_target()
    }

    fn handle_shot_result(&mut self, target: Coord, result: ShotResult) {
        let msg = match result {
            ShotResult::Repeat => "You already fired at this cell.",
            ShotResult::Miss => "Miss.",
            ShotResult::Hit => "Ship hit!",
            ShotResult::Kill => "Ship destroyed!",
        };
        let _ = writeln!(self.output, "{target}: {msg}");
    }

    fn handle_opponent_shot(&mut self, target: Coord, result: ShotResult) {
        let _ = writeln!(
            self.output,
            "Opponent fires at {target} -> {:?}",
            result
        );
    }
}
