//! Sources of player moves.
//!
//! The engine never reads input itself. The driver asks a [`MoveSource`]
//! for the next move and decides what to do with malformed or illegal
//! answers.

mod console;
mod scripted;

pub use console::ConsoleMoves;
pub use scripted::ScriptedMoves;

use crate::games::tictactoe::{Move, Player};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Something that can supply moves for the player whose turn it is.
pub trait MoveSource {
    /// Gets the next move for `turn`.
    fn next_move(&mut self, turn: Player) -> Result<Move, InputError>;
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn next_move(&mut self, turn: Player) -> Result<Move, InputError> {
        (**self).next_move(turn)
    }
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self, turn: Player) -> Result<Move, InputError> {
        (**self).next_move(turn)
    }
}

/// Failure to obtain a move from a [`MoveSource`].
#[derive(Debug, Display, Error)]
pub enum InputError {
    /// The line was not two comma-separated integers. Recoverable.
    #[display("Invalid input {:?}: expected row,column", input)]
    Malformed {
        /// The offending line, without its line terminator.
        #[error(not(source))]
        input: String,
    },

    /// No more input is available.
    #[display("Input closed before the game ended")]
    Closed,

    /// Reading or prompting failed.
    #[display("I/O error: {}", _0)]
    Io(#[error(source)] std::io::Error),
}

impl InputError {
    /// True for errors worth re-prompting the same player over.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, InputError::Malformed { .. })
    }
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Parses `row,column` into a [`Move`].
///
/// Exactly two comma-separated integer tokens are required; whitespace
/// around each token is ignored.
#[instrument]
pub fn parse_move(line: &str) -> Result<Move, InputError> {
    let malformed = || InputError::Malformed {
        input: line.to_string(),
    };

    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    let [row, col] = tokens.as_slice() else {
        debug!(tokens = tokens.len(), "Wrong number of tokens");
        return Err(malformed());
    };

    let row = row.parse::<i64>().map_err(|_| malformed())?;
    let col = col.parse::<i64>().map_err(|_| malformed())?;
    Ok(Move::new(row, col))
}
