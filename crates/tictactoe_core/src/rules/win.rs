//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark, Move};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Checks whether `mark` owns all three cells of some line.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&mv| board.cell(mv) == Some(Cell::Occupied(mark)))
    })
}
