//! Win detection logic for tic-tac-toe.

use super::Line;
use crate::{Board, Mark};
use tracing::instrument;

/// Finds the first completed line on the board.
///
/// Lines are scanned in [`Line::ALL`] order and the scan stops at the first
/// line whose three cells hold the same mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions().map(|pos| board.get(pos));
        match a {
            Some(mark) if b == a && c == a => Some((line, mark)),
            _ => None,
        }
    })
}
