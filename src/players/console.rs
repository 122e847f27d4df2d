//! Move source backed by a line-oriented console.

use super::{InputError, MoveSource, parse_move};
use crate::games::tictactoe::{Move, Player};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Prompts on `output` and reads one move per line from `input`.
pub struct ConsoleMoves<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleMoves<R, W> {
    /// Creates a console move source.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the source, returning the prompt writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleMoves<R, W> {
    #[instrument(skip(self))]
    fn next_move(&mut self, turn: Player) -> Result<Move, InputError> {
        write!(self.output, "Enter {} move (row,column no spaces)> ", turn)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Err(InputError::Closed);
        }
        parse_move(line.trim_end_matches(['\r', '\n']))
    }
}
