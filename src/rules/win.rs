//! Win detection: scan of the eight winning triples.

use crate::board::{Board, Cell};
use crate::player::PlayerId;
use tracing::instrument;

/// The eight winning triples as flat indices: three rows, three
/// columns, two diagonals. Scan order is fixed; the first fully
/// covered triple decides the winner.
pub const WINNING_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the id of the player holding a winning triple, if any.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<PlayerId> {
    for [a, b, c] in WINNING_TRIPLES {
        let cell = board.flat(a)?;
        if cell != Cell::Empty && Some(cell) == board.flat(b) && Some(cell) == board.flat(c) {
            if let Cell::Occupied(id) = cell {
                return Some(id);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, idx: usize, id: u8) {
        let (row, col) = crate::coords::flat_to_matrix(idx);
        board.set_cell(row, col, PlayerId::new(id)).unwrap();
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for idx in [0, 1, 2] {
            place(&mut board, idx, 0);
        }
        assert_eq!(find_winner(&board), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_winner_middle_column() {
        let mut board = Board::new();
        for idx in [1, 4, 7] {
            place(&mut board, idx, 1);
        }
        assert_eq!(find_winner(&board), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        for idx in [2, 4, 6] {
            place(&mut board, idx, 1);
        }
        assert_eq!(find_winner(&board), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        place(&mut board, 0, 0);
        place(&mut board, 1, 0);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        place(&mut board, 0, 0);
        place(&mut board, 1, 1);
        place(&mut board, 2, 0);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_first_triple_in_table_order_wins() {
        // Player 0 holds both the top row and the left column; the row
        // comes first in the table.
        let mut board = Board::new();
        for idx in [0, 1, 2, 3, 6] {
            place(&mut board, idx, 0);
        }
        assert_eq!(find_winner(&board), Some(PlayerId::new(0)));
    }
}
