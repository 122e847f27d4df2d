//! Console tic-tac-toe entry point.

use anyhow::{Context, Result};
use clap::Parser;
use console_tictactoe::{Cli, Config, ConsoleMoves, play};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let config = match cli.win_gate {
        Some(gate) => config.with_win_gate(gate),
        None => config,
    };

    // Logs go to stderr; stdout carries the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    run_game(&config)
}

/// Plays one game on stdin/stdout.
#[instrument(skip_all, fields(win_gate = %config.win_gate()))]
fn run_game(config: &Config) -> Result<()> {
    let source = ConsoleMoves::new(io::stdin().lock(), io::stdout());
    let outcome = play(source, io::stdout(), *config.win_gate()).context("Game aborted")?;
    info!(%outcome, "Finished");
    Ok(())
}
