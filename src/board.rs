//! Board storage: a 3x3 grid of cells addressed in matrix notation.

use crate::coords;
use crate::player::PlayerId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns. Fixed for the lifetime of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed.
    Empty,
    /// Cell occupied by the player with the given id.
    Occupied(PlayerId),
}

impl Cell {
    /// Returns true for an empty cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the rendering marker: `X`/`O` for occupied, space for empty.
    pub fn marker(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(id) => id.marker(),
        }
    }
}

/// Out-of-range coordinate error.
///
/// Coordinates are 1-based; anything outside `1..=3` is a caller bug in
/// the presentation layer, not a recoverable runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Row index outside `1..=3`.
    #[display("Row {} out of range (use 1-based matrix notation)", _0)]
    RowOutOfRange(usize),

    /// Column index outside `1..=3`.
    #[display("Column {} out of range (use 1-based matrix notation)", _0)]
    ColOutOfRange(usize),
}

impl std::error::Error for BoardError {}

/// 3x3 board of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
        if row < 1 || row > SIZE {
            return Err(BoardError::RowOutOfRange(row));
        }
        if col < 1 || col > SIZE {
            return Err(BoardError::ColOutOfRange(col));
        }
        Ok(())
    }

    /// Reads the cell at 1-based (row, col).
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] when either coordinate is outside `1..=3`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[coords::matrix_to_flat(row, col)])
    }

    /// Reads the cell at a 0-based flat index (0-8).
    pub fn flat(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    /// Writes the given player id into the cell at 1-based (row, col),
    /// overwriting any prior value. Occupancy policy belongs to the
    /// match controller, not the board.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] when either coordinate is outside `1..=3`.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, row: usize, col: usize, id: PlayerId) -> Result<(), BoardError> {
        Self::check_bounds(row, col)?;
        self.cells[coords::matrix_to_flat(row, col)] = Cell::Occupied(id);
        Ok(())
    }

    /// Sets every cell back to empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELLS];
    }

    /// Returns a deep-copy snapshot of the grid, rows in order.
    /// Mutating the returned value does not affect the board.
    pub fn state(&self) -> [[Cell; SIZE]; SIZE] {
        let mut grid = [[Cell::Empty; SIZE]; SIZE];
        for (idx, cell) in self.cells.iter().enumerate() {
            grid[idx / SIZE][idx % SIZE] = *cell;
        }
        grid
    }

    /// Returns all cells as a flat row-major slice.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
