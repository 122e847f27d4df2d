//! Turn order, move validation and move execution.

use super::super::{Board, Move, Player, Position, Square};
use tracing::{debug, instrument};

/// Renders `board` for the console. Printing is up to the caller.
pub fn render(board: &Board) -> String {
    board.render()
}

/// Returns whose turn follows `turn`.
pub fn next_turn(turn: Player) -> Player {
    turn.opponent()
}

/// True iff both coordinates are in `1..=3` and the addressed cell is empty.
///
/// Total over every integer pair.
#[instrument(skip(board))]
pub fn validate_move(mv: &Move, board: &Board) -> bool {
    let valid = Position::from_move(mv).is_some_and(|pos| board.is_empty(pos));
    debug!(valid, "Validated move");
    valid
}

/// Marks the cell addressed by `mv` with `turn`.
///
/// Callers must have checked the move with [`validate_move`]. An
/// off-board move leaves the board untouched; an occupied cell is
/// overwritten.
#[instrument(skip(board))]
pub fn execute_move(mv: &Move, board: &mut Board, turn: Player) {
    if let Some(pos) = Position::from_move(mv) {
        board.set(pos, Square::Occupied(turn));
    }
}
