//! Game orchestration between the human and the computer.

use super::players::Player;
use super::render::render_board;
use anyhow::Result;
use std::io::Write;
use tictactoe_core::{Game, GameOutcome, Phase};
use tracing::{debug, info, instrument};

/// Orchestrates one game between two players.
pub struct Orchestrator<'a> {
    game: Game,
    human: Box<dyn Player + 'a>,
    computer: Box<dyn Player + 'a>,
}

impl<'a> Orchestrator<'a> {
    /// Creates a new orchestrator with a fresh game.
    pub fn new(human: Box<dyn Player + 'a>, computer: Box<dyn Player + 'a>) -> Self {
        Self {
            game: Game::new(),
            human,
            computer,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until someone wins or the board fills up.
    ///
    /// The board is drawn before every move and once more at the end,
    /// followed by the result.
    #[instrument(skip_all, fields(human = %self.human.name(), computer = %self.computer.name()))]
    pub fn run(&mut self, out: &mut dyn Write) -> Result<GameOutcome> {
        info!("Starting game");

        loop {
            write!(out, "{}", render_board(self.game.board()))?;

            let player = match self.game.phase() {
                Phase::HumanTurn => &mut self.human,
                Phase::ComputerTurn => &mut self.computer,
                Phase::Finished(outcome) => return Ok(outcome),
            };

            debug!(player = %player.name(), "Waiting for move");
            let mv = player.choose_move(self.game.board(), out)?;

            if let Phase::Finished(outcome) = self.game.play(mv)? {
                write!(out, "{}", render_board(self.game.board()))?;
                writeln!(out, "{}", self.announcement(outcome))?;
                info!(?outcome, moves = self.game.history().len(), "Game over");
                return Ok(outcome);
            }
        }
    }

    fn announcement(&self, outcome: GameOutcome) -> String {
        match outcome {
            GameOutcome::HumanWins => format!("{} wins!", self.human.name()),
            GameOutcome::ComputerWins => format!("{} wins!", self.computer.name()),
            GameOutcome::Draw => "It's a tie!".to_string(),
            GameOutcome::InProgress => "Game in progress".to_string(),
        }
    }
}
