//! Board consistency: X moves first, so X leads O by zero or one mark.

use super::Invariant;
use crate::{Board, Game, Mark};
use tracing::warn;

/// Invariant: the number of X marks is the number of O marks, or one more.
pub struct BoardConsistentInvariant;

impl BoardConsistentInvariant {
    /// Checks the mark counts of a bare board.
    pub fn board_holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

impl Invariant<Game> for BoardConsistentInvariant {
    fn holds(game: &Game) -> bool {
        Self::board_holds(game.board())
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        for (notation, expected) in [
            (".../.../...", true),
            ("X../.../...", true),
            ("XO./.../...", true),
            ("O../.../...", false),
            ("XX./.../...", false),
            ("XXX/O../...", false),
        ] {
            let board: Board = notation.parse().unwrap();
            assert_eq!(BoardConsistentInvariant::board_holds(&board), expected, "{notation}");
        }
    }
}
