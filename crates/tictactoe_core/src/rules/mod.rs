//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The board's own query methods delegate
//! here so the rules can be tested in isolation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{has_won, LINES};

use crate::types::{Board, GameOutcome, Mark};

/// Derives the outcome of a position.
///
/// A human line is reported before a computer line, and any line before a
/// full board, so a full board that contains a line is a win, not a draw.
pub fn outcome(board: &Board) -> GameOutcome {
    if has_won(board, Mark::HUMAN) {
        GameOutcome::HumanWins
    } else if has_won(board, Mark::COMPUTER) {
        GameOutcome::ComputerWins
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_in_progress() {
        assert_eq!(outcome(&Board::new()), GameOutcome::InProgress);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(outcome(&board), GameOutcome::HumanWins);
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let board: Board = "OXX/XXO/OOX".parse().unwrap();
        assert!(is_full(&board));
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert_eq!(outcome(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_computer_line() {
        let board: Board = "X.O/XO./O..".parse().unwrap();
        assert_eq!(outcome(&board), GameOutcome::ComputerWins);
    }
}
