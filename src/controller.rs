//! Interactive-widget controller.
//!
//! The controller owns a [`GameEngine`] and turns user commands (cell
//! selected, reset, exit) into engine calls, keeping a [`ViewState`] that a
//! widget front-end draws as-is.

use derive_getters::Getters;
use noughts_engine::{GameEngine, Grid, Line, Mark, Outcome};
use tracing::{debug, info, instrument};

/// A user action from the widget front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The cell at zero-based `(row, col)` was selected.
    Select {
        /// Zero-based row.
        row: i32,
        /// Zero-based column.
        col: i32,
    },
    /// Start over with a fresh engine.
    Reset,
    /// Leave the program.
    Exit,
}

/// Whether the front-end should keep running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep handling input.
    Continue,
    /// Stop the front-end.
    Exit,
}

/// Everything a widget front-end displays.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ViewState {
    /// Marks shown in each cell.
    cells: Grid,
    /// Whose turn it is, e.g. `X's turn`.
    turn_banner: String,
    /// Final result once the game is over.
    result_banner: Option<String>,
    /// Last rejection message; empty when the last action succeeded.
    error: String,
    /// Cells to highlight after a win.
    winning_line: Option<Line>,
}

impl ViewState {
    fn fresh(turn: Mark) -> Self {
        Self {
            cells: [[None; 3]; 3],
            turn_banner: turn_banner(turn),
            result_banner: None,
            error: String::new(),
            winning_line: None,
        }
    }
}

fn turn_banner(turn: Mark) -> String {
    format!("{}'s turn", turn)
}

fn result_banner(outcome: Outcome) -> String {
    match outcome.winner() {
        Some(mark) => format!("{} wins!", mark),
        None => "Tie game!".to_string(),
    }
}

/// Dispatches widget commands to a [`GameEngine`].
#[derive(Debug, Clone)]
pub struct WidgetController {
    engine: GameEngine,
    view: ViewState,
}

impl WidgetController {
    /// Creates a controller with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        let engine = GameEngine::new();
        let view = ViewState::fresh(engine.turn());
        Self { engine, view }
    }

    /// The current display state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The engine driving this controller.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Handles one command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Select { row, col } => {
                self.select(row, col);
                Flow::Continue
            }
            Command::Reset => {
                self.reset();
                Flow::Continue
            }
            Command::Exit => {
                info!("Exit requested");
                Flow::Exit
            }
        }
    }

    fn select(&mut self, row: i32, col: i32) {
        if self.engine.is_game_over() {
            debug!("Selection ignored: game is over");
            return;
        }

        match self.engine.apply_move(row, col) {
            Ok(()) => {
                self.view.cells = self.engine.board();
                self.view.turn_banner = turn_banner(self.engine.turn());
                self.view.error.clear();
            }
            Err(err) => {
                debug!(error = %err, "Selection rejected");
                self.view.error = err.to_string();
            }
        }

        if let Some(outcome) = self.engine.outcome() {
            info!(%outcome, "Game over");
            self.view.result_banner = Some(result_banner(outcome));
            self.view.winning_line = self.engine.winning_line();
        }
    }

    fn reset(&mut self) {
        info!("Resetting game");
        self.engine = GameEngine::new();
        self.view = ViewState::fresh(self.engine.turn());
    }
}

impl Default for WidgetController {
    fn default() -> Self {
        Self::new()
    }
}
