//! Tic-tac-toe game engine.

mod action;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use rules::{
    MAX_MOVES, MIN_MOVES_FOR_WIN, WinGate, execute_move, is_full, is_game_over,
    is_game_over_with, next_turn, render, validate_move, winner,
};
pub use state::{GameState, GameStatus, Outcome};
pub use types::{Board, Player, Square};
