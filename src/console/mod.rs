//! Terminal front-end: rendering, players, and the game loop.

pub mod orchestrator;
pub mod players;
pub mod render;

use crate::config::GameConfig;
use anyhow::{Context, Result};
use orchestrator::Orchestrator;
use players::{ComputerPlayer, HumanPlayer};
use std::io::{BufRead, Write};
use tictactoe_core::{Board, GameOutcome, search};
use tracing::instrument;

/// Plays one interactive game, reading the human's moves from `input`.
#[instrument(skip_all)]
pub fn play_game(config: &GameConfig, input: impl BufRead, out: &mut dyn Write) -> Result<GameOutcome> {
    let mut orchestrator = Orchestrator::new(
        Box::new(HumanPlayer::new(config.human_name().clone(), input)),
        Box::new(ComputerPlayer::new(config.computer_name().clone())),
    );
    orchestrator.run(out)
}

/// Describes the computer's move for a board given in text notation.
///
/// Plain output is `row col` on the first line followed by the score and
/// search size; `json` prints the full report instead.
#[instrument]
pub fn best_move(notation: &str, json: bool) -> Result<String> {
    let board: Board = notation
        .parse()
        .with_context(|| format!("Invalid board {notation:?}"))?;
    let report = search::search(&board)?;

    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let verdict = match report.score {
        search::COMPUTER_WIN => "computer wins",
        search::HUMAN_WIN => "human wins",
        _ => "draw",
    };
    Ok(format!(
        "{}\nscore: {} ({verdict}), positions searched: {}",
        report.best, report.score, report.positions
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_move_plain() {
        let text = best_move("OO./X../XX.", false).unwrap();
        assert!(text.starts_with("0 2\nscore: 1 (computer wins)"), "{text}");
    }

    #[test]
    fn test_best_move_json() {
        let text = best_move("X.O/.X./...", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["best"]["row"], 2);
        assert_eq!(value["best"]["col"], 2);
        assert_eq!(value["score"], 0);
    }

    #[test]
    fn test_best_move_rejects_bad_notation() {
        let err = best_move("XO", false).unwrap_err();
        assert!(err.to_string().contains("Invalid board"), "{err}");
    }

    #[test]
    fn test_best_move_rejects_finished_board() {
        let err = best_move("XXX/OO./...", false).unwrap_err();
        assert!(err.to_string().contains("No move available"), "{err}");
    }
}
