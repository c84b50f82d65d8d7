//! Error types for board operations, input parsing, and search.

use crate::types::GameOutcome;
use derive_more::{Display, Error};

/// A move that cannot be applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,
}

/// Text that does not describe a move.
///
/// `OutOfRange` is numerically well-formed but names a cell off the board;
/// callers usually report it like an illegal move rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseMoveError {
    /// Input did not contain exactly two tokens.
    #[display("expected two numbers, found {found} value(s)")]
    WrongCount {
        /// Number of whitespace-separated tokens found.
        found: usize,
    },

    /// A token is not an integer.
    #[display("{token:?} is not a number")]
    NotANumber {
        /// The offending token.
        token: String,
    },

    /// Both tokens are integers but at least one lies outside 0-2.
    #[display("({row}, {col}) is outside the board")]
    OutOfRange {
        /// Parsed row.
        row: i64,
        /// Parsed column.
        col: i64,
    },
}

impl ParseMoveError {
    /// Returns true if the input could not be read as two integers at all.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, ParseMoveError::OutOfRange { .. })
    }
}

/// Board notation that cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Notation did not contain exactly nine cells.
    #[display("expected 9 cells, found {found}")]
    WrongLength {
        /// Number of cells found.
        found: usize,
    },

    /// A character is not a mark, an empty marker, or a separator.
    #[display("unexpected character {ch:?} in board notation")]
    BadCell {
        /// The offending character.
        ch: char,
    },
}

/// The search engine was asked for a move it cannot produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The position is already decided, so there is nothing to search.
    #[display("No move available: position is already decided ({_0:?})")]
    NoMoveAvailable(#[error(not(source))] GameOutcome),
}
