//! Tic-tac-toe in the terminal against an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Core** (`tictactoe_core`): board rules, game state machine, search
//! - **Console**: board rendering, human and computer players, game loop
//! - **Config**: optional TOML file with player names
//! - **CLI**: `play` and `best-move` commands
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{GameConfig, play_game};
//! use tictactoe_core::GameOutcome;
//!
//! // The human opens in a corner and then plays carelessly.
//! let input = "0 0\n2 2\n0 2\n1 0\n";
//! let mut out = Vec::new();
//! let outcome = play_game(&GameConfig::default(), input.as_bytes(), &mut out)?;
//! assert_eq!(outcome, GameOutcome::ComputerWins);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console front-end
pub use console::orchestrator::Orchestrator;
pub use console::players::{
    ComputerPlayer, HumanPlayer, INVALID_INPUT, INVALID_MOVE, PROMPT, Player,
};
pub use console::render::render_board;
pub use console::{best_move, play_game};
