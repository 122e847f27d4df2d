//! Marker balance invariant: X moves first and the players alternate.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X has as many markers as O, or exactly one more.
pub struct MarkerBalanceInvariant;

impl Invariant<GameState> for MarkerBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by at most one marker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Position, Square};

    #[test]
    fn test_holds_through_a_game() {
        let mut state = GameState::new();
        for (row, col) in [(1, 1), (2, 2), (3, 3), (1, 3)] {
            state.apply(Move::new(row, col)).expect("legal move");
            assert!(MarkerBalanceInvariant::holds(&state));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut state = GameState::new();
        state.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MarkerBalanceInvariant::holds(&state));
    }
}
