//! Turn state machine for a single human-versus-computer game.
//!
//! The human (`X`) always moves first. After each move the mover's lines are
//! checked, then the board for fullness, and only then does the turn pass.

use crate::error::MoveError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::types::{Board, GameOutcome, Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Whose turn it is, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human's move.
    HumanTurn,
    /// Waiting for the computer's move.
    ComputerTurn,
    /// The game is over. The outcome is never `InProgress`.
    Finished(GameOutcome),
}

impl Phase {
    /// Mark of the player to move, or `None` once finished.
    pub fn to_move(self) -> Option<Mark> {
        match self {
            Phase::HumanTurn => Some(Mark::HUMAN),
            Phase::ComputerTurn => Some(Mark::COMPUTER),
            Phase::Finished(_) => None,
        }
    }

    /// Returns the outcome if the game is over.
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            Phase::Finished(outcome) => Some(outcome),
            Phase::HumanTurn | Phase::ComputerTurn => None,
        }
    }
}

/// A game in any phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game on an empty board with the human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::HumanTurn,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game has finished.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Plays `mv` for whichever side is to move and returns the new phase.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already finished
    /// - [`MoveError::OutOfRange`] / [`MoveError::Occupied`] for an illegal
    ///   cell; the game is left unchanged
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn play(&mut self, mv: Move) -> Result<Phase, MoveError> {
        let mover = self.phase.to_move().ok_or(MoveError::GameOver)?;
        self.board.place(mv, mover)?;
        self.history.push(mv);

        self.phase = if self.board.has_won(mover) {
            Phase::Finished(match mover {
                Mark::X => GameOutcome::HumanWins,
                Mark::O => GameOutcome::ComputerWins,
            })
        } else if self.board.is_full() {
            Phase::Finished(GameOutcome::Draw)
        } else {
            match mover {
                Mark::X => Phase::ComputerTurn,
                Mark::O => Phase::HumanTurn,
            }
        };

        debug!(%mv, %mover, next = ?self.phase, "Move applied");
        self.assert_invariants();
        Ok(self.phase)
    }

    /// Rebuilds a game by playing `moves` from the start.
    ///
    /// # Errors
    ///
    /// Fails on the first illegal move, including any move after the game
    /// has finished.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &mv in moves {
            game.play(mv)?;
        }
        Ok(game)
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(self)
        {
            warn!(?violations, "Game invariants violated");
            debug_assert!(violations.is_empty(), "{violations:?}");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
