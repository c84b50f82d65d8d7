//! Human player that types moves as text.

use super::Player;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Move};
use tracing::{debug, instrument};

/// Prompt shown before each attempt.
pub const PROMPT: &str = "Enter your move (row and column, 0-2): ";
/// Shown for an occupied or off-board cell.
pub const INVALID_MOVE: &str = "Invalid move. Try again.";
/// Shown when the line is not two integers.
pub const INVALID_INPUT: &str = "Invalid input. Enter two numbers separated by a space.";

/// Human player reading `"<row> <col>"` lines from any buffered reader.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    /// Re-prompts until a legal move is entered.
    ///
    /// # Errors
    ///
    /// Fails if the input ends or cannot be read.
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board, out: &mut dyn Write) -> Result<Move> {
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("Input closed before a move was entered");
            }

            let rejection = match line.parse::<Move>() {
                Ok(mv) => match board.validate(mv) {
                    Ok(()) => {
                        debug!(%mv, "Human chose move");
                        return Ok(mv);
                    }
                    Err(e) => {
                        debug!(error = %e, "Illegal move");
                        INVALID_MOVE
                    }
                },
                Err(e) if e.is_malformed() => {
                    debug!(error = %e, input = line.trim(), "Malformed input");
                    INVALID_INPUT
                }
                Err(e) => {
                    debug!(error = %e, "Move off the board");
                    INVALID_MOVE
                }
            };
            writeln!(out, "{rejection}")?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choose(board: &Board, input: &str) -> (Result<Move>, String) {
        let mut player = HumanPlayer::new("X", input.as_bytes());
        let mut out = Vec::new();
        let result = player.choose_move(board, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_accepts_first_legal_move() {
        let (result, out) = choose(&Board::new(), "1 2\n");
        assert_eq!(result.unwrap(), Move::new(1, 2));
        assert_eq!(out, PROMPT);
    }

    #[test]
    fn test_reprompts_with_distinct_messages() {
        let board: Board = "X../.../...".parse().unwrap();
        let (result, out) = choose(&board, "hello\n0 0\n3 1\n1\n-1 0\n2 2\n");

        assert_eq!(result.unwrap(), Move::new(2, 2));
        let expected = [
            INVALID_INPUT, // hello
            INVALID_MOVE,  // occupied
            INVALID_MOVE,  // row 3
            INVALID_INPUT, // one number
            INVALID_MOVE,  // negative row
        ]
        .iter()
        .map(|msg| format!("{PROMPT}{msg}\n"))
        .collect::<String>()
            + PROMPT;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let (result, out) = choose(&Board::new(), "oops\n");
        assert!(result.unwrap_err().to_string().contains("Input closed"));
        assert_eq!(out, format!("{PROMPT}{INVALID_INPUT}\n{PROMPT}"));
    }
}
