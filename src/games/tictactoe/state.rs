//! Game state owned by the driver loop.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use super::rules::{MAX_MOVES, WinGate, execute_move, is_game_over_with, next_turn};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no line for either player.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} is the winner!", player),
            Outcome::Draw => write!(f, "The game ended in a draw."),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game is over; no further moves are accepted.
    Finished(Outcome),
}

/// Complete game state: board, turn and move counter.
///
/// `move_count` starts at 1 and is incremented once per accepted move, so
/// after `n` moves it reads `n + 1` and exactly `n` squares are occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) turn: Player,
    pub(super) move_count: usize,
    pub(super) last_mover: Option<Player>,
    pub(super) status: GameStatus,
    gate: WinGate,
}

impl GameState {
    /// Creates a new game with X to move and the default win gate.
    pub fn new() -> Self {
        Self::with_gate(WinGate::default())
    }

    /// Creates a new game using `gate` for win detection.
    #[instrument]
    pub fn with_gate(gate: WinGate) -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            move_count: 1,
            last_mover: None,
            status: GameStatus::InProgress,
            gate,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Once the game is finished this stays frozen at the last mover.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the move counter (1 before the first move).
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the player who made the most recent accepted move.
    pub fn last_mover(&self) -> Option<Player> {
        self.last_mover
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the outcome once the game has finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Finished(outcome) => Some(outcome),
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Returns the win gate policy in use.
    pub fn gate(&self) -> WinGate {
        self.gate
    }

    /// Applies a move for the current player.
    ///
    /// Rejected moves leave the state untouched, including the move counter.
    #[instrument(skip(self), fields(turn = %self.turn, move_count = self.move_count))]
    pub fn apply(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_move(&mv).ok_or(MoveError::OutOfRange(mv))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mover = self.turn;
        execute_move(&mv, &mut self.board, mover);
        self.move_count += 1;
        self.last_mover = Some(mover);
        debug!(%pos, %mover, "Move applied");

        if is_game_over_with(self.gate, &self.board, self.move_count, mover) {
            info!(winner = %mover, "Line completed");
            self.status = GameStatus::Finished(Outcome::Winner(mover));
        } else if self.move_count > MAX_MOVES {
            info!("Board full without a line");
            self.status = GameStatus::Finished(Outcome::Draw);
        } else {
            self.turn = next_turn(mover);
        }

        debug_assert_eq!(
            GameInvariants::check_all(self),
            Ok(()),
            "Invariant violation after move"
        );

        Ok(self.status)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
