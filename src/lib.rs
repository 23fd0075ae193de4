//! Noughts - two-player tic-tac-toe with console and terminal front-ends.
//!
//! # Architecture
//!
//! - **Engine** ([`noughts_engine`]): board state, move legality, win and
//!   tie detection. Re-exported here.
//! - **Console**: [`ConsoleController`] plays a game over any text stream.
//! - **Widget controller**: [`WidgetController`] turns cell/reset/exit
//!   commands into engine calls and keeps a drawable [`ViewState`].
//! - **Terminal UI**: [`run_tui`] draws the widget controller with ratatui.
//!
//! # Example
//!
//! ```
//! use noughts::{ConsoleController, GameEngine, Session};
//!
//! let mut engine = GameEngine::new();
//! let mut console = ConsoleController::new("2 2 q".as_bytes(), Vec::new());
//! assert_eq!(console.play_game(&mut engine)?, Session::Quit);
//! # Ok::<(), noughts::ConsoleError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod controller;
mod tui;

// Crate-level exports - front-ends
pub use console::{ConsoleController, ConsoleError, Session};
pub use controller::{Command, Flow, ViewState, WidgetController};
pub use tui::run as run_tui;

// Crate-level exports - engine types
pub use noughts_engine::{
    EngineError, ErrorKind, GameEngine, GameStatus, Grid, Line, Mark, Move, Outcome, Position,
};
