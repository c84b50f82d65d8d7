//! Tic-tac-toe game logic for a human-versus-computer match.
//!
//! The crate is pure: no terminal or file I/O happens here.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move validation, and notation parsing
//! - **Rules**: win and draw detection over the eight lines
//! - **Search**: exhaustive minimax that picks the computer's move
//! - **Game**: the turn state machine driving a single match
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Move, search};
//!
//! let board = Board::new();
//! let best = search::find_best_move(&board)?;
//! assert_eq!(best, Move::new(0, 0));
//! # Ok::<(), tictactoe_core::SearchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod invariants;
mod types;

pub mod rules;
pub mod search;

pub use error::{MoveError, ParseBoardError, ParseMoveError, SearchError};
pub use game::{Game, Phase};
pub use invariants::{
    AlternatingTurnInvariant, BoardConsistentInvariant, GameInvariants,
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
};
pub use search::{SearchReport, Score};
pub use types::{Board, Cell, GameOutcome, Mark, Move};
