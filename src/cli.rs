//! Command-line interface for console_tictactoe.

use crate::games::tictactoe::WinGate;
use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe on the console
#[derive(Parser, Debug)]
#[command(name = "console_tictactoe")]
#[command(about = "Two players take turns entering row,column moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Which winning lines wait for five moves: first-row-only or all-lines
    #[arg(long)]
    pub win_gate: Option<WinGate>,
}
