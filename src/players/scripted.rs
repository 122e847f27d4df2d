//! Move source that replays pre-recorded lines.

use super::{InputError, MoveSource, parse_move};
use crate::games::tictactoe::{Move, Player};
use std::collections::VecDeque;
use tracing::instrument;

/// Replays raw input lines as if typed at the console, without prompting.
///
/// Runs out with [`InputError::Closed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    lines: VecDeque<String>,
}

impl ScriptedMoves {
    /// Creates a source from raw lines such as `"2,3"`.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl MoveSource for ScriptedMoves {
    #[instrument(skip(self))]
    fn next_move(&mut self, _turn: Player) -> Result<Move, InputError> {
        let line = self.lines.pop_front().ok_or(InputError::Closed)?;
        parse_move(&line)
    }
}
