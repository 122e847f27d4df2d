//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Fewest moves after which a line can be complete (three by the first player).
pub const MIN_MOVES_FOR_WIN: usize = 5;

/// The eight winning lines. The first entry is the top row.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Which lines the [`MIN_MOVES_FOR_WIN`] gate applies to.
///
/// The classic console game only gated the top row, so a board with any
/// other complete line counts as won even when `move_count` is below the
/// minimum. During play the two policies always agree, since no real game
/// reaches a complete line before the gate opens; they only differ for
/// boards built by hand.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WinGate {
    /// Gate only the top row (behavioral parity with the classic game).
    FirstRowOnly,
    /// Gate every line.
    #[default]
    AllLines,
}

fn line_is(board: &Board, line: &[Position; 3], player: Player) -> bool {
    line.iter()
        .all(|pos| board.get(*pos) == Square::Occupied(player))
}

/// Checks whether `turn` has completed a line, using the default [`WinGate`].
///
/// Draws are not detected here; the driver infers them once the board has
/// taken [`MAX_MOVES`](super::MAX_MOVES) moves.
#[instrument(skip(board))]
pub fn is_game_over(board: &Board, move_count: usize, turn: Player) -> bool {
    is_game_over_with(WinGate::default(), board, move_count, turn)
}

/// Checks whether `turn` has completed a line under an explicit gate policy.
#[instrument(skip(board))]
pub fn is_game_over_with(gate: WinGate, board: &Board, move_count: usize, turn: Player) -> bool {
    let gate_open = move_count >= MIN_MOVES_FOR_WIN;
    LINES.iter().enumerate().any(|(i, line)| {
        let gated = match gate {
            WinGate::FirstRowOnly => i == 0,
            WinGate::AllLines => true,
        };
        (gate_open || !gated) && line_is(board, line, turn)
    })
}

/// Returns the player holding any complete line, ignoring move counts.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }
    None
}
