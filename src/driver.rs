//! Game loop between two players sharing one move source.

use crate::games::tictactoe::{GameState, MoveError, Outcome, WinGate};
use crate::players::{InputError, MoveSource};
use derive_more::{Display, Error};
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Printed when a parsed move is off the board or on an occupied square.
pub const INVALID_MOVE_MESSAGE: &str = "Invalid move, try again.";

/// Printed when a line cannot be parsed as a move at all.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input, enter row,column (e.g. 2,3).";

/// Failure that ends a game before it reaches an outcome.
#[derive(Debug, Display, Error)]
pub enum DriverError {
    /// The move source failed or ran dry.
    #[display("Failed to read move: {}", _0)]
    Input(#[error(source)] InputError),

    /// Writing to the console failed.
    #[display("Failed to write output: {}", _0)]
    Output(#[error(source)] std::io::Error),
}

impl From<InputError> for DriverError {
    fn from(err: InputError) -> Self {
        DriverError::Input(err)
    }
}

impl From<std::io::Error> for DriverError {
    fn from(err: std::io::Error) -> Self {
        DriverError::Output(err)
    }
}

/// Runs one game: renders the board, collects moves, announces the result.
pub struct Driver<S, W> {
    state: GameState,
    source: S,
    out: W,
}

impl<S: MoveSource, W: Write> Driver<S, W> {
    /// Creates a driver for a fresh game.
    pub fn new(source: S, out: W, gate: WinGate) -> Self {
        Self {
            state: GameState::with_gate(gate),
            source,
            out,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the driver, returning the output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays until a win or a draw.
    ///
    /// Invalid moves and malformed lines re-prompt the same player without
    /// consuming a turn.
    #[instrument(skip(self), fields(gate = %self.state.gate()))]
    pub fn run(&mut self) -> Result<Outcome, DriverError> {
        info!("Starting game");

        let outcome = loop {
            if let Some(outcome) = self.state.outcome() {
                break outcome;
            }
            writeln!(self.out, "{}", self.state.board())?;
            self.take_turn()?;
        };

        writeln!(self.out, "{}", self.state.board())?;
        writeln!(self.out, "{}", outcome)?;
        self.out.flush()?;

        info!(
            winner = ?outcome.winner(),
            draw = outcome.is_draw(),
            move_count = self.state.move_count(),
            "Game over"
        );
        Ok(outcome)
    }

    /// Prompts the current player until one move is accepted.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    fn take_turn(&mut self) -> Result<(), DriverError> {
        let turn = self.state.turn();
        loop {
            let mv = match self.source.next_move(turn) {
                Ok(mv) => mv,
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "Rejected input");
                    writeln!(self.out, "{}", INVALID_INPUT_MESSAGE)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            match self.state.apply(mv) {
                Ok(status) => {
                    debug!(%mv, ?status, "Move accepted");
                    return Ok(());
                }
                Err(MoveError::GameOver) => return Ok(()),
                Err(e) => {
                    debug!(%mv, error = %e, "Move rejected");
                    writeln!(self.out, "{}", INVALID_MOVE_MESSAGE)?;
                }
            }
        }
    }
}

/// Plays one game on `out`, drawing moves from `source`.
pub fn play<S: MoveSource, W: Write>(
    source: S,
    out: W,
    gate: WinGate,
) -> Result<Outcome, DriverError> {
    Driver::new(source, out, gate).run()
}
