//! Occupancy invariant: occupied squares track the move counter.

use super::super::GameState;
use super::Invariant;

/// Invariant: exactly `move_count - 1` squares are occupied.
///
/// Each accepted move fills one empty square and bumps the counter once;
/// rejected moves touch neither.
pub struct OccupancyInvariant;

impl Invariant<GameState> for OccupancyInvariant {
    fn holds(state: &GameState) -> bool {
        state.board().occupied() + 1 == state.move_count()
    }

    fn description() -> &'static str {
        "Occupied squares equal move_count - 1"
    }
}
