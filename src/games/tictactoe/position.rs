//! Validated cell addresses on the board.

use super::action::Move;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board.
///
/// Unlike a [`Move`], a `Position` is always on the board. Players address
/// cells 1-based; positions are stored 0-based in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Row 1, column 1.
    TopLeft,
    /// Row 1, column 2.
    TopCenter,
    /// Row 1, column 3.
    TopRight,
    /// Row 2, column 1.
    MiddleLeft,
    /// Row 2, column 2.
    Center,
    /// Row 2, column 3.
    MiddleRight,
    /// Row 3, column 1.
    BottomLeft,
    /// Row 3, column 2.
    BottomCenter,
    /// Row 3, column 3.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 0-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// 0-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Maps a player's 1-based coordinates onto the board.
    ///
    /// Returns `None` when either coordinate falls outside `1..=3`.
    #[instrument]
    pub fn from_move(mv: &Move) -> Option<Self> {
        let in_range = |c: i64| (1..=3).contains(&c);
        if !in_range(mv.row) || !in_range(mv.col) {
            return None;
        }
        let index = (mv.row - 1) * 3 + (mv.col - 1);
        usize::try_from(index).ok().and_then(Self::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row() + 1, self.col() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_from_move_corners() {
        assert_eq!(Position::from_move(&Move::new(1, 1)), Some(Position::TopLeft));
        assert_eq!(Position::from_move(&Move::new(2, 3)), Some(Position::MiddleRight));
        assert_eq!(Position::from_move(&Move::new(3, 3)), Some(Position::BottomRight));
    }

    #[test]
    fn test_from_move_rejects_out_of_range() {
        for (row, col) in [(0, 1), (1, 0), (4, 1), (1, 4), (-1, 2), (i64::MAX, 1), (2, i64::MIN)] {
            assert_eq!(Position::from_move(&Move::new(row, col)), None);
        }
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::MiddleRight.to_string(), "2,3");
    }
}
