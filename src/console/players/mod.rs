//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, INVALID_INPUT, INVALID_MOVE, PROMPT};

use anyhow::Result;
use std::io::Write;
use tictactoe_core::{Board, Move};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Prompts and status lines go to `out`. The returned move is on the
    /// board and names an empty cell.
    fn choose_move(&mut self, board: &Board, out: &mut dyn Write) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
