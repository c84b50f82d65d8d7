//! Alternating turns: the phase agrees with how many moves were made.

use super::Invariant;
use crate::{Game, Phase};

/// Invariant: an even history means the human is to move, odd the computer.
///
/// Finished games are exempt since either side may have made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let played = game.board().cells().len() - game.board().empty_cells().len();
        let expected = if played % 2 == 0 {
            Phase::HumanTurn
        } else {
            Phase::ComputerTurn
        };

        match game.phase() {
            Phase::Finished(_) => true,
            phase => phase == expected && played == game.history().len(),
        }
    }

    fn description() -> &'static str {
        "Players alternate, human first"
    }
}
