//! Terminal widget front-end.
//!
//! Draws a [`WidgetController`]'s view with ratatui and feeds it commands
//! from crossterm key events. Tracing output must not go to the terminal
//! while this runs; the binary points it at a log file.

mod input;
mod ui;

use crate::controller::{Flow, WidgetController};
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::KeyAction;
use noughts_engine::Position;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};

/// Puts the terminal back into cooked mode when dropped, on every exit path.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    /// Enables raw mode and the alternate screen.
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            restore: restore_terminal,
        };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Runs the terminal UI until the player exits.
#[instrument]
pub fn run() -> Result<()> {
    info!("Starting terminal UI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal);

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI loop failed");
    }
    info!("Terminal UI closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let mut controller = WidgetController::new();
    let mut cursor = Position::Center;

    loop {
        terminal.draw(|frame| ui::draw(frame, controller.view(), cursor))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match input::action_for(key.code, cursor) {
            KeyAction::MoveCursor(pos) => cursor = pos,
            KeyAction::Dispatch(command) => {
                debug!(?command, "Dispatching command");
                if controller.handle(command) == Flow::Exit {
                    return Ok(());
                }
            }
            KeyAction::Ignore => {}
        }
    }
}
