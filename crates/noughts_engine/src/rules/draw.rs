//! Full-board detection for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no completed line is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied() == 9
}

#[cfg(test)]
mod tests {
    use super::super::win::winning_line;
    use super::*;
    use crate::{Grid, Mark};

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let grid: Grid = [[X, O, None], [None, X, None], [None, None, None]];
        assert!(!is_full(&Board::from(grid)));
    }

    #[test]
    fn test_tie_board_is_full_without_winner() {
        // X O X / O X X / O X O
        let grid: Grid = [[X, O, X], [O, X, X], [O, X, O]];
        let board = Board::from(grid);
        assert!(is_full(&board));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_full_board_can_still_have_winner() {
        let grid: Grid = [[X, X, X], [O, O, X], [X, O, O]];
        let board = Board::from(grid);
        assert!(is_full(&board));
        assert!(winning_line(&board).is_some());
    }
}
