#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::{board::Board, config::BOARD_SIZE, game::GameStatus};

const RULE: &str = "--------------------";

/// Print the welcome banner and the input format.
pub fn write_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "     Welcome to     ")?;
    writeln!(out, "     SEA  BATTLE    ")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, " input format: x y ")?;
    writeln!(out, " x - row number (1-{BOARD_SIZE})")?;
    writeln!(out, " y - column number (1-{BOARD_SIZE})")?;
    Ok(())
}

/// Display the player's own board (top) and the opponent board (bottom).
pub fn write_boards<W: Write>(out: &mut W, own: &Board, enemy: &Board) -> io::Result<()> {
    writeln!(out, "Your board:")?;
    writeln!(out, "{own}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Opponent board:")?;
    writeln!(out, "{enemy}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Legend: ■=Ship  X=Hit  #=Sunk  o=Miss  -=Near sunk ship  .=Water")?;
    Ok(())
}

/// Print the closing message of a finished match.
pub fn write_outcome<W: Write>(out: &mut W, status: GameStatus) -> io::Result<()> {
    if let Some(msg) = status.outcome_message() {
        writeln!(out, "{msg}")?;
    }
    Ok(())
}
