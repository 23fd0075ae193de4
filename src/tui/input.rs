//! Key bindings for the terminal front-end.

use crate::controller::Command;
use crossterm::event::KeyCode;
use noughts_engine::Position;

/// What a key press means in the current cursor context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the cursor to a new cell.
    MoveCursor(Position),
    /// Send a command to the controller.
    Dispatch(Command),
    /// Key has no binding.
    Ignore,
}

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row() as i32, cursor.col() as i32);
    let (row, col) = match key {
        KeyCode::Up => (row - 1, col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col - 1),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}

fn select(pos: Position) -> Command {
    Command::Select {
        row: pos.row() as i32,
        col: pos.col() as i32,
    }
}

/// Maps a key to an action.
///
/// Arrows move the cursor, Enter or Space selects it, digits 1-9 select a
/// cell directly (row-major, like a phone keypad), `r` resets, and `q` or
/// Esc exits.
pub fn action_for(key: KeyCode, cursor: Position) -> KeyAction {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyAction::MoveCursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Dispatch(select(cursor)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map_or(KeyAction::Ignore, |pos| KeyAction::Dispatch(select(pos))),
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Dispatch(Command::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            KeyAction::Dispatch(Command::Exit)
        }
        _ => KeyAction::Ignore,
    }
}
