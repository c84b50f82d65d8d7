//! Computer player backed by the minimax search.

use super::Player;
use anyhow::Result;
use std::io::Write;
use tictactoe_core::{Board, Move, search};
use tracing::{info, instrument};

/// Computer player that always picks the search engine's move.
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board, out: &mut dyn Write) -> Result<Move> {
        writeln!(out, "{}'s turn...", self.name)?;

        let report = search::search(board)?;
        info!(
            best = %report.best,
            score = report.score,
            positions = report.positions,
            "Computer chose move"
        );
        Ok(report.best)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announces_turn_and_blocks() {
        let board: Board = "X.O/.X./...".parse().unwrap();
        let mut player = ComputerPlayer::new("Minimax");
        let mut out = Vec::new();

        let mv = player.choose_move(&board, &mut out).unwrap();

        assert_eq!(mv, Move::new(2, 2));
        assert_eq!(String::from_utf8(out).unwrap(), "Minimax's turn...\n");
    }

    #[test]
    fn test_finished_board_is_an_error() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let mut player = ComputerPlayer::new("O");
        let err = player.choose_move(&board, &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("No move available"), "{err}");
    }
}
