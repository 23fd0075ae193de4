//! Pure tic-tac-toe rules engine.
//!
//! [`GameEngine`] owns a 3x3 board, enforces move legality, detects wins and
//! ties, and alternates turns. It performs no I/O; front-ends drive it by
//! calling [`GameEngine::apply_move`] and then reading its state.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameEngine, Mark};
//!
//! let mut game = GameEngine::new();
//! game.apply_move(1, 1)?;
//! assert_eq!(game.turn(), Mark::O);
//! assert_eq!(game.mark_at(1, 1)?, Some(Mark::X));
//! # Ok::<(), noughts_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod mark;
mod outcome;
mod position;

pub mod invariants;
pub mod rules;

pub use board::{Board, Grid, ROW_SEPARATOR, render_grid};
pub use engine::GameEngine;
pub use error::{EngineError, ErrorKind};
pub use mark::Mark;
pub use outcome::{GameStatus, Move, Outcome};
pub use position::Position;
pub use rules::Line;
