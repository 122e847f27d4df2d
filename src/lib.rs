//! Console tic-tac-toe for two players sharing a keyboard.
//!
//! # Architecture
//!
//! - **Games**: the pure engine: board, rules, and [`GameState`]
//! - **Players**: the [`MoveSource`] boundary that turns text into moves
//! - **Driver**: the loop that prompts, validates, and announces results
//! - **Config**: optional TOML settings
//!
//! # Example
//!
//! ```
//! use console_tictactoe::{Outcome, Player, ScriptedMoves, WinGate, play};
//!
//! let moves = ScriptedMoves::new(["1,1", "2,2", "1,2", "3,3", "1,3"]);
//! let mut transcript: Vec<u8> = Vec::new();
//! let outcome = play(moves, &mut transcript, WinGate::default()).unwrap();
//! assert_eq!(outcome, Outcome::Winner(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;
mod games;
mod players;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{Config, ConfigError};

// Crate-level exports - Driver loop
pub use driver::{DriverError, Driver, INVALID_INPUT_MESSAGE, INVALID_MOVE_MESSAGE, play};

// Crate-level exports - Move sources
pub use players::{ConsoleMoves, InputError, MoveSource, ScriptedMoves, parse_move};

// Crate-level exports - Game engine
pub use games::tictactoe::invariants;
pub use games::tictactoe::{
    Board, GameState, GameStatus, MAX_MOVES, MIN_MOVES_FOR_WIN, Move, MoveError, Outcome, Player,
    Position, Square, WinGate, execute_move, is_full, is_game_over, is_game_over_with, next_turn,
    render, validate_move, winner,
};
