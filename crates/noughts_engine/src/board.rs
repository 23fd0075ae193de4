//! Board storage and text rendering.

use crate::{Mark, Position};

/// A 3x3 grid of optional marks, indexed `[row][col]`.
///
/// This is the snapshot type handed out by [`crate::GameEngine::board`].
/// It is a plain value: mutating a snapshot never reaches the engine.
pub type Grid = [[Option<Mark>; 3]; 3];

/// Separator line between rendered rows.
pub const ROW_SEPARATOR: &str = "-----------";

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at the given position, if any.
    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.cells[pos.row()][pos.col()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Places a mark. Callers check occupancy first; cells are never cleared.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row()][pos.col()] = Some(mark);
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Returns an independent copy of the cells.
    pub fn snapshot(&self) -> Grid {
        self.cells
    }
}

impl From<Grid> for Board {
    fn from(cells: Grid) -> Self {
        Self { cells }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_grid(&self.cells))
    }
}

/// Renders a grid as text.
///
/// Each row is ` a | b | c` with empty cells as a single space, rows are
/// joined by a line of eleven dashes, and there is no trailing newline.
pub fn render_grid(grid: &Grid) -> String {
    grid.iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|cell| cell.map_or(' ', Mark::symbol).to_string())
                .collect::<Vec<_>>()
                .join(" | ");
            format!(" {}", cells)
        })
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", ROW_SEPARATOR))
}
