//! Exhaustive minimax search for the computer player.
//!
//! Every line of play is explored to the end of the game. Scores are from
//! the computer's point of view: `+1` for a forced computer win, `-1` for a
//! forced human win, `0` for a draw. Depth is ignored, so a win
//! in one move and a win in five compare equal, and ties between moves go to
//! the first candidate in row-major order.
//!
//! Tentative moves are applied in place and reverted by a `Tentative` guard, whose
//! `Drop` clears the cell on every exit path.

use crate::error::SearchError;
use crate::types::{Board, Cell, GameOutcome, Mark, Move};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, trace};

/// Game-theoretic value of a position from the computer's perspective.
pub type Score = i8;

/// The computer can force a win.
pub const COMPUTER_WIN: Score = 1;
/// Best play on both sides ends in a draw.
pub const DRAW: Score = 0;
/// The human can force a win.
pub const HUMAN_WIN: Score = -1;

/// Result of a full search from one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// The chosen move.
    pub best: Move,
    /// Value of the chosen move.
    pub score: Score,
    /// Number of positions evaluated.
    pub positions: u64,
}

/// A mark placed for exploration; the cell is cleared again on drop.
pub(crate) struct Tentative<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> Tentative<'a> {
    /// Places `mark` at `mv`, which must be an empty cell on the board.
    pub(crate) fn place(board: &'a mut Board, mv: Move, mark: Mark) -> Self {
        debug_assert_eq!(board.cell(mv), Some(Cell::Empty), "tentative move {mv}");
        board.set(mv, Cell::Occupied(mark));
        Self { board, mv }
    }
}

impl Deref for Tentative<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Tentative<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Tentative<'_> {
    fn drop(&mut self) {
        self.board.clear(self.mv);
    }
}

/// Evaluates `board` with `to_move` about to play.
///
/// The board is explored in place and restored before returning.
pub fn evaluate(board: &mut Board, to_move: Mark) -> Score {
    let mut positions = 0;
    minimax(board, to_move, &mut positions)
}

fn minimax(board: &mut Board, to_move: Mark, positions: &mut u64) -> Score {
    *positions += 1;

    if board.has_won(Mark::HUMAN) {
        return HUMAN_WIN;
    }
    if board.has_won(Mark::COMPUTER) {
        return COMPUTER_WIN;
    }
    if board.is_full() {
        return DRAW;
    }

    let maximizing = to_move == Mark::COMPUTER;
    let mut best = if maximizing { Score::MIN } else { Score::MAX };

    for mv in board.empty_cells() {
        let mut child = Tentative::place(board, mv, to_move);
        let score = minimax(&mut child, to_move.opponent(), positions);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Searches every computer move and reports the best one.
///
/// # Errors
///
/// Returns [`SearchError::NoMoveAvailable`] if the position is already won
/// or the board is full.
#[instrument(skip(board), fields(board = %board))]
pub fn search(board: &Board) -> Result<SearchReport, SearchError> {
    let outcome = board.outcome();
    if outcome != GameOutcome::InProgress {
        return Err(SearchError::NoMoveAvailable(outcome));
    }

    let mut work = board.clone();
    let mut positions = 0;
    let mut best: Option<(Move, Score)> = None;

    for mv in work.empty_cells() {
        let mut child = Tentative::place(&mut work, mv, Mark::COMPUTER);
        let score = minimax(&mut child, Mark::HUMAN, &mut positions);
        trace!(%mv, score, "Candidate evaluated");

        // Strict comparison keeps the earliest of equally good moves.
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((mv, score));
        }
    }

    let (best, score) = best.ok_or(SearchError::NoMoveAvailable(outcome))?;
    debug!(%best, score, positions, "Search complete");
    Ok(SearchReport {
        best,
        score,
        positions,
    })
}

/// Returns the computer's best move for `board`.
///
/// # Errors
///
/// Returns [`SearchError::NoMoveAvailable`] on a terminal board.
pub fn find_best_move(board: &Board) -> Result<Move, SearchError> {
    search(board).map(|report| report.best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tentative_restores_cell_on_drop() {
        let mut board: Board = "X../.O./...".parse().unwrap();
        let before = board.clone();

        {
            let child = Tentative::place(&mut board, Move::new(2, 2), Mark::X);
            assert_eq!(child.cell(Move::new(2, 2)), Some(Cell::Occupied(Mark::X)));
        }

        assert_eq!(board, before);
    }

    #[test]
    fn test_tentative_restores_cell_on_unwind() {
        let mut board = Board::new();
        let before = board.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _child = Tentative::place(&mut board, Move::new(1, 1), Mark::O);
            panic!("exploration failed");
        }));

        assert!(result.is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_tentatives_unwind_in_order() {
        let mut board = Board::new();
        {
            let mut first = Tentative::place(&mut board, Move::new(0, 0), Mark::X);
            {
                let second = Tentative::place(&mut first, Move::new(0, 1), Mark::O);
                assert_eq!(second.to_string(), "XO./.../...");
            }
            assert_eq!(first.to_string(), "X../.../...");
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_terminal_scores() {
        let mut human_won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(evaluate(&mut human_won, Mark::O), HUMAN_WIN);

        let mut computer_won: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(evaluate(&mut computer_won, Mark::X), COMPUTER_WIN);

        let mut drawn: Board = "OXX/XXO/OOX".parse().unwrap();
        assert_eq!(evaluate(&mut drawn, Mark::O), DRAW);
    }

    #[test]
    fn test_human_line_takes_precedence_over_computer_line() {
        // Not reachable in play, but fixes the check order.
        let mut board: Board = "XXX/OOO/...".parse().unwrap();
        assert_eq!(evaluate(&mut board, Mark::O), HUMAN_WIN);
        assert_eq!(evaluate(&mut board, Mark::X), HUMAN_WIN);
    }

    #[test]
    fn test_win_on_full_board_is_not_a_draw() {
        let mut board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(evaluate(&mut board, Mark::O), HUMAN_WIN);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = Board::new();
        assert_eq!(evaluate(&mut board, Mark::X), DRAW);
        assert_eq!(board, Board::new());
    }
}
