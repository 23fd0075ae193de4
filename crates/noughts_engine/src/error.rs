//! Engine error types.

use derive_more::{Display, Error};

/// Broad category of an [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad coordinates or an occupied target cell.
    InvalidArgument,
    /// The operation is not allowed in the current game state.
    IllegalState,
}

/// Error returned when the engine rejects an operation.
///
/// A rejected operation never changes engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Row or column outside `0..=2`.
    #[display("Invalid position ({}, {}): row and column must be 0, 1, or 2", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The target cell already holds a mark.
    #[display("Invalid position ({}, {}): position is already occupied", row, col)]
    Occupied {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// A move was attempted after the game ended.
    #[display("The game is over")]
    GameOver,
}

impl EngineError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::OutOfBounds { .. } | EngineError::Occupied { .. } => {
                ErrorKind::InvalidArgument
            }
            EngineError::GameOver => ErrorKind::IllegalState,
        }
    }
}
