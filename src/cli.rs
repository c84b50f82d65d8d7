//! Command-line interface for tictactoe_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Play tic-tac-toe against an opponent that searches the whole game tree
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game on stdin/stdout (you are X and move first)
    Play {
        /// Path to a TOML file with player names
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the computer's move for a position
    BestMove {
        /// Board in row-major order, e.g. "X.O/.X./..." (`.` is empty)
        board: String,

        /// Print the search report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { config: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe_minimax"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::Play { config: None });
    }

    #[test]
    fn test_best_move_args() {
        let cli = Cli::try_parse_from(["tictactoe_minimax", "best-move", "X../.../...", "--json"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::BestMove {
                board: "X../.../...".to_string(),
                json: true,
            })
        );
    }

    #[test]
    fn test_play_with_config() {
        let cli = Cli::try_parse_from(["tictactoe_minimax", "play", "-c", "names.toml"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                config: Some(PathBuf::from("names.toml")),
            })
        );
    }
}
