//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so they can be checked against hand-built boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_line;

use crate::Position;
use serde::{Deserialize, Serialize};

/// A row, column, or diagonal of three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All eight lines in scan order: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The three cells of this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;

        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::CenterColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::Diagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Whether the line passes through `pos`.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Line::TopRow => "top row",
            Line::MiddleRow => "middle row",
            Line::BottomRow => "bottom row",
            Line::LeftColumn => "left column",
            Line::CenterColumn => "center column",
            Line::RightColumn => "right column",
            Line::Diagonal => "diagonal",
            Line::AntiDiagonal => "anti-diagonal",
        };
        write!(f, "{name}")
    }
}
