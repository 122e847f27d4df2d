//! Player-supplied moves and the ways they can be rejected.
//!
//! A [`Move`] is raw intent: any pair of integers a player typed. It only
//! becomes a board [`Position`] once it has been checked against the rules.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A move as entered by a player: 1-based row and column.
///
/// Coordinates are not range-checked here; see
/// [`validate_move`](super::rules::validate_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 1-based row.
    pub row: i64,
    /// 1-based column.
    pub col: i64,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        // Both coordinates are at most 3.
        Self::new(pos.row() as i64 + 1, pos.col() as i64 + 1)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside `1..=3`.
    #[display("Move {} is off the board", _0)]
    OutOfRange(#[error(not(source))] Move),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}
