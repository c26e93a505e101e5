//! Draw detection: a full board with no winner is drawn.

use crate::board::{Board, Cell};
use tracing::instrument;

/// Returns true when no empty cell remains.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// Returns the number of empty cells remaining.
pub fn empty_cells(board: &Board) -> usize {
    board.cells().iter().filter(|cell| cell.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerId;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert_eq!(empty_cells(&board), 9);
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set_cell(2, 2, PlayerId::new(0)).unwrap();
        assert!(!is_full(&board));
        assert_eq!(empty_cells(&board), 8);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for row in 1..=3 {
            for col in 1..=3 {
                board.set_cell(row, col, PlayerId::new(0)).unwrap();
            }
        }
        assert!(is_full(&board));
        assert_eq!(empty_cells(&board), 0);
    }
}
