//! Console front-end.
//!
//! Reads whitespace-separated tokens from any [`BufRead`], writes a plain-text
//! transcript to any [`Write`], and drives a [`GameEngine`] one move at a time.

use derive_more::{Display, Error};
use noughts_engine::{EngineError, ErrorKind, GameEngine, Mark, Outcome};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Error that ends a console session abnormally.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Input ran out before the game ended and no quit token was seen.
    #[display("Input stream closed before game ended")]
    InputExhausted,

    /// Reading input or writing the transcript failed.
    #[display("Console I/O failed: {}", _0)]
    Io(io::Error),

    /// The engine refused a move for a reason other than bad input.
    #[display("Engine rejected move: {}", _0)]
    Engine(EngineError),
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<EngineError> for ConsoleError {
    fn from(err: EngineError) -> Self {
        Self::Engine(err)
    }
}

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    /// The game was played to the end.
    Finished(Outcome),
    /// The player typed `q`.
    Quit,
}

/// Splits a reader into whitespace-separated tokens, one line at a time.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Plays a game over a text stream.
///
/// Moves are entered as two 1-based integers (row, then column). A `q` or
/// `Q` token in place of either integer quits immediately.
pub struct ConsoleController<R, W> {
    input: Tokens<R>,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleController<R, W> {
    /// Creates a controller reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Tokens::new(input),
            output,
        }
    }

    /// Returns the output sink, consuming the controller.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the prompt/move loop until the game ends or the player quits.
    #[instrument(skip_all)]
    pub fn play_game(&mut self, engine: &mut GameEngine) -> Result<Session, ConsoleError> {
        info!("Console session started");

        loop {
            if let Some(outcome) = engine.outcome() {
                self.print_result(engine, outcome)?;
                info!(%outcome, "Console session finished");
                return Ok(Session::Finished(outcome));
            }

            self.print_prompt(engine)?;

            let Some((row, col)) = self.read_move()? else {
                self.print_quit(engine)?;
                info!("Console session quit");
                return Ok(Session::Quit);
            };

            match engine.apply_move(row.saturating_sub(1), col.saturating_sub(1)) {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::InvalidArgument => {
                    warn!(row, col, error = %err, "Move rejected");
                    writeln!(self.output, "Not a valid move: {}, {}", row, col)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Collects two integers, reporting non-numeric tokens as they come.
    ///
    /// Returns `None` when a quit token is read.
    fn read_move(&mut self) -> Result<Option<(i32, i32)>, ConsoleError> {
        let mut pair = Vec::with_capacity(2);

        while pair.len() < 2 {
            let token = self
                .input
                .next_token()?
                .ok_or(ConsoleError::InputExhausted)?;

            if token.eq_ignore_ascii_case("q") {
                return Ok(None);
            }

            match token.parse::<i32>() {
                Ok(value) => pair.push(value),
                Err(_) => {
                    debug!(%token, "Non-numeric token");
                    writeln!(self.output, "Not a valid number: {}", token)?;
                }
            }
        }

        Ok(Some((pair[0], pair[1])))
    }

    fn print_prompt(&mut self, engine: &GameEngine) -> io::Result<()> {
        writeln!(self.output, "{}", engine)?;
        writeln!(self.output, "Enter a move for {}:", engine.turn())
    }

    fn print_quit(&mut self, engine: &GameEngine) -> io::Result<()> {
        writeln!(self.output, "Game quit! Ending game state:")?;
        writeln!(self.output, "{}", engine)
    }

    fn print_result(&mut self, engine: &GameEngine, outcome: Outcome) -> io::Result<()> {
        writeln!(self.output, "{}", engine)?;
        match outcome.winner() {
            None => writeln!(self.output, "Game is over! Tie game."),
            Some(Mark::X) => writeln!(self.output, "Game is over! X wins."),
            Some(Mark::O) => writeln!(self.output, "Game is over! O wins."),
        }
    }
}
