//! Invariants of the rules engine.
//!
//! Each invariant is a logical property of [`GameEngine`] that must hold
//! after every operation. They are asserted after each successful move in
//! debug builds and can be checked independently.

use crate::rules;
use crate::{Board, GameEngine, Mark, Outcome};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the history replays onto an empty board to give exactly the
/// current board, never touching a cell twice. Implies that the move count
/// equals the number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut replayed = Board::new();
        for mov in engine.history() {
            if !replayed.is_empty(mov.position) {
                return false;
            }
            replayed.place(mov.position, mov.mark);
        }
        replayed == *engine.board_ref()
    }

    fn description() -> &'static str {
        "History replays to the current board (move count equals occupied cells)"
    }
}

/// Invariant: marks alternate starting with [`Mark::FIRST`], and the turn
/// flips on every move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let alternates = engine
            .history()
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.mark == expected_mark(i));
        alternates && engine.turn() == expected_mark(engine.move_count())
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, ...) and the turn flips after every move"
    }
}

fn expected_mark(moves_before: usize) -> Mark {
    if moves_before % 2 == 0 {
        Mark::FIRST
    } else {
        Mark::FIRST.opponent()
    }
}

/// Invariant: the recorded outcome matches the board. A win is recorded iff
/// some line is complete (first in scan order), a tie iff the board is full
/// with no complete line.
pub struct OutcomeMatchesBoardInvariant;

impl Invariant<GameEngine> for OutcomeMatchesBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board_ref();
        let expected = match rules::winning_line(board) {
            Some((line, mark)) => Some(Outcome::Win { mark, line }),
            None if rules::is_full(board) => Some(Outcome::Tie),
            None => None,
        };
        engine.outcome() == expected
    }

    fn description() -> &'static str {
        "Outcome is set exactly when a line is complete or the board is full"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
    OutcomeMatchesBoardInvariant,
);

/// Asserts that all engine invariants hold (panics on violation in debug builds).
#[instrument(skip(engine))]
pub fn assert_invariants(engine: &GameEngine) {
    if cfg!(debug_assertions)
        && let Err(violations) = EngineInvariants::check_all(engine)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        debug_assert!(false, "Engine invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn played(moves: &[(i32, i32)]) -> GameEngine {
        let mut engine = GameEngine::new();
        for &(row, col) in moves {
            engine.apply_move(row, col).unwrap();
        }
        engine
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(EngineInvariants::check_all(&GameEngine::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_won_game() {
        let engine = played(&[(0, 0), (1, 0), (0, 1), (2, 0), (0, 2)]);
        assert!(engine.is_game_over());
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_overwritten_cell_violates_history() {
        let mut engine = played(&[(1, 1)]);
        engine.corrupt(Position::TopLeft, Mark::O);

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            HistoryConsistentInvariant::description()
        );
    }

    #[test]
    fn test_completed_line_without_outcome_is_detected() {
        let mut engine = played(&[(0, 0), (1, 1), (0, 1)]);
        engine.corrupt(Position::TopRight, Mark::X);
        assert!(!OutcomeMatchesBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_alternation_holds_after_moves() {
        let engine = played(&[(0, 0), (1, 1), (2, 2)]);
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.turn(), Mark::O);
    }
}
