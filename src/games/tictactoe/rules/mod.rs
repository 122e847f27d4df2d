//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Nothing here performs
//! I/O or owns game state; the driver threads a
//! [`GameState`](super::GameState) through them.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{MAX_MOVES, is_full};
pub use moves::{execute_move, next_turn, render, validate_move};
pub use win::{MIN_MOVES_FOR_WIN, WinGate, is_game_over, is_game_over_with, winner};
