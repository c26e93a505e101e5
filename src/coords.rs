//! Coordinate conversion between matrix notation and flat board indices.
//!
//! The board is addressed two ways: presentation code works in 1-based
//! (row, col) matrix coordinates, while the rules tables work over the
//! 0-based flat index (0-8) in row-major order. These functions are the
//! mapping between the two.

/// Converts a 1-based (row, col) matrix coordinate to a 0-based flat index.
///
/// Pure transform, no validation: callers are expected to pass
/// `row, col` in `1..=3`. Out-of-range input yields a meaningless index
/// (and underflows on zero), so validate at the board boundary first.
pub fn matrix_to_flat(row: usize, col: usize) -> usize {
    (col - 1) + 3 * (row - 1)
}

/// Converts a 0-based flat index (0-8) to a 1-based (row, col) pair.
pub fn flat_to_matrix(idx: usize) -> (usize, usize) {
    (idx / 3 + 1, idx % 3 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_and_center_indices() {
        assert_eq!(matrix_to_flat(1, 1), 0);
        assert_eq!(matrix_to_flat(2, 2), 4);
        assert_eq!(matrix_to_flat(3, 3), 8);
    }

    #[test]
    fn test_row_major_order() {
        assert_eq!(matrix_to_flat(1, 3), 2);
        assert_eq!(matrix_to_flat(2, 1), 3);
        assert_eq!(matrix_to_flat(3, 1), 6);
    }

    #[test]
    fn test_flat_to_matrix_inverse() {
        assert_eq!(flat_to_matrix(0), (1, 1));
        assert_eq!(flat_to_matrix(4), (2, 2));
        assert_eq!(flat_to_matrix(8), (3, 3));
        assert_eq!(flat_to_matrix(5), (2, 3));
    }

    #[test]
    fn test_round_trip_all_cells() {
        for row in 1..=3 {
            for col in 1..=3 {
                let idx = matrix_to_flat(row, col);
                assert_eq!(flat_to_matrix(idx), (row, col));
                assert_eq!(matrix_to_flat(flat_to_matrix(idx).0, flat_to_matrix(idx).1), idx);
            }
        }
    }
}
