//! tictactoe_minimax - terminal entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_minimax::{Cli, Command, GameConfig, best_move, play_game};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    match cli.command.unwrap_or_default() {
        Command::Play { config } => run_play(config),
        Command::BestMove { board, json } => {
            println!("{}", best_move(&board, json)?);
            Ok(())
        }
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
fn run_play(config: Option<std::path::PathBuf>) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let outcome = play_game(&config, stdin.lock(), &mut stdout)?;
    info!(?outcome, "Session finished");
    Ok(())
}
