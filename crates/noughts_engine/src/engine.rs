//! The rules engine.
//!
//! [`GameEngine`] owns the board and is the only authority on move legality
//! and outcome. It has two states: in progress, and over (won or tied).
//! Once over, every mutating call fails and the state never changes again.

use crate::invariants::assert_invariants;
use crate::rules::{self, Line};
use crate::{Board, EngineError, GameStatus, Grid, Mark, Move, Outcome, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    history: Vec<Move>,
    outcome: Option<Outcome>,
}

impl GameEngine {
    /// Creates a game with an empty board and [`Mark::FIRST`] to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::FIRST,
            history: Vec::with_capacity(9),
            outcome: None,
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Checks, in order: the game is not over, both coordinates are in
    /// `0..=2`, and the cell is empty. On success the turn passes to the
    /// other mark, including after the move that ends the game.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<(), EngineError> {
        if self.is_game_over() {
            debug!("Move rejected: game is over");
            return Err(EngineError::GameOver);
        }

        let pos = Position::from_coords(row, col).ok_or_else(|| {
            debug!("Move rejected: out of bounds");
            EngineError::OutOfBounds { row, col }
        })?;

        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Move rejected: occupied");
            return Err(EngineError::Occupied { row, col });
        }

        let mov = Move::new(self.turn, pos);
        self.board.place(pos, self.turn);
        self.history.push(mov);
        debug!(%mov, moves = self.history.len(), "Move applied");

        self.evaluate();
        self.turn = self.turn.opponent();

        assert_invariants(self);
        Ok(())
    }

    /// Settles the outcome after a placement.
    fn evaluate(&mut self) {
        if let Some((line, mark)) = rules::winning_line(&self.board) {
            info!(%mark, %line, "Game won");
            self.outcome = Some(Outcome::Win { mark, line });
        } else if self.history.len() == 9 {
            info!("Game tied");
            self.outcome = Some(Outcome::Tie);
        }
    }

    /// The mark to move next.
    ///
    /// Still answers after the game is over; the value then carries no meaning.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The winning mark, or `None` while in progress and on a tie.
    pub fn winner(&self) -> Option<Mark> {
        self.outcome.and_then(|outcome| outcome.winner())
    }

    /// The outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.outcome {
            Some(Outcome::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        match self.outcome {
            Some(outcome) => GameStatus::Over(outcome),
            None => GameStatus::InProgress,
        }
    }

    /// Number of marks placed so far (0-9).
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Moves played, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// An independent copy of the board.
    pub fn board(&self) -> Grid {
        self.board.snapshot()
    }

    /// The mark at `(row, col)`.
    ///
    /// Fails with [`EngineError::OutOfBounds`] if either coordinate is
    /// outside `0..=2`.
    #[instrument(skip(self))]
    pub fn mark_at(&self, row: i32, col: i32) -> Result<Option<Mark>, EngineError> {
        Position::from_coords(row, col)
            .map(|pos| self.board.get(pos))
            .ok_or(EngineError::OutOfBounds { row, col })
    }

    pub(crate) fn board_ref(&self) -> &Board {
        &self.board
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
impl GameEngine {
    /// Overwrites a cell without any checks, for invariant tests.
    pub(crate) fn corrupt(&mut self, pos: Position, mark: Mark) {
        self.board.place(pos, mark);
    }
}
