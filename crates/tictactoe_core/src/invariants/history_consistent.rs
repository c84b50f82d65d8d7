//! History consistency: replaying the history rebuilds the board exactly.

use super::Invariant;
use crate::{Board, Cell, Game, Mark};

/// Invariant: the board equals the history replayed from empty, X first.
///
/// This also rules out overwritten cells, since a replayed move onto an
/// occupied cell fails.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let mut rebuilt = Board::new();
        let mut mark = Mark::X;

        for &mv in game.history() {
            if rebuilt.cell(mv) != Some(Cell::Empty) {
                return false;
            }
            rebuilt.set(mv, Cell::Occupied(mark));
            mark = mark.opponent();
        }

        rebuilt == *game.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_replayed_game_holds() {
        let game = Game::replay(&[Move::new(0, 0), Move::new(1, 1), Move::new(0, 1)]).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = Game::replay(&[Move::new(1, 1)]).unwrap();
        game.board.set(Move::new(1, 1), Cell::Occupied(Mark::O));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut game = Game::replay(&[Move::new(1, 1)]).unwrap();
        game.history.push(Move::new(1, 1));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
