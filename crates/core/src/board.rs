//! Board module - manages the game grid
//!
//! The board is a `cols x rows` grid where each cell is empty or holds a [`Block`].
//! Coordinates: (x, y) where x ranges `0..cols` (left to right) and y ranges
//! `0..rows` (top to bottom).
//!
//! Storage is a single flat allocation in column-major order (`x * rows + y`), so
//! each column is a contiguous slice. That keeps row clears and garbage pushes as
//! one `copy_within` per column. The flattening never leaks out of this module:
//! callers only see `get(x, y)` / `set(x, y, ..)`.

use crate::error::CoreError;
use crate::types::{Block, Cell, MIN_BOARD_DIMENSION};

/// The game board with runtime dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Column-major cells (`x * rows + y`)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Fails when either side is below the 4-cell minimum, or when the grid
    /// cannot be allocated.
    pub fn new(rows: usize, cols: usize) -> Result<Self, CoreError> {
        if rows < MIN_BOARD_DIMENSION || cols < MIN_BOARD_DIMENSION {
            return Err(CoreError::InvalidDimensions { rows, cols });
        }
        let size = rows
            .checked_mul(cols)
            .ok_or(CoreError::InvalidDimensions { rows, cols })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| CoreError::BoardAllocation { cells: size })?;
        cells.resize(size, None);

        Ok(Self { rows, cols, cells })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some(x as usize * self.rows + y as usize)
    }

    /// Contiguous cells of column `x` (top to bottom)
    #[inline]
    fn column(&self, x: usize) -> &[Cell] {
        &self.cells[x * self.rows..(x + 1) * self.rows]
    }

    #[inline]
    fn column_mut(&mut self, x: usize) -> &mut [Cell] {
        let rows = self.rows;
        &mut self.cells[x * rows..(x + 1) * rows]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.cols as i32 || y < 0 || y >= self.rows as i32
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }
        (0..self.cols).all(|x| self.column(x)[y].is_some())
    }

    /// Number of rows that are currently full
    pub fn count_full_rows(&self) -> usize {
        (0..self.rows).filter(|&y| self.is_row_full(y)).count()
    }

    /// Clear a row and shift all rows above it down by one
    /// Returns false if the row is out of range
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }

        for x in 0..self.cols {
            let column = self.column_mut(x);
            column.copy_within(0..y, 1);
            column[0] = None;
        }

        true
    }

    /// Clear every full row and return how many were removed
    ///
    /// Rows are scanned top to bottom. Clearing a row only moves rows above it,
    /// which have already been checked, so a single pass removes every full row
    /// and keeps the remaining rows in their relative order.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for y in 0..self.rows {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared += 1;
            }
        }
        cleared
    }

    /// Push a garbage row with a single empty column at `hole`
    pub fn push_garbage_row(&mut self, hole: usize) {
        let bottom = self.rows - 1;
        for x in 0..self.cols {
            let column = self.column_mut(x);
            column.copy_within(1.., 0);
            column[bottom] = if x == hole { None } else { Some(Block::Garbage) };
        }
    }

    /// Height of column `x`: distance from the bottom to its topmost filled cell
    ///
    /// Returns 0 for an empty column or an out-of-range `x`.
    pub fn column_height(&self, x: usize) -> usize {
        if x >= self.cols {
            return 0;
        }
        self.column(x)
            .iter()
            .position(Option::is_some)
            .map_or(0, |top| self.rows - top)
    }

    /// Empty cells in column `x` with at least one filled cell above them
    pub fn column_holes(&self, x: usize) -> usize {
        if x >= self.cols {
            return 0;
        }
        let column = self.column(x);
        match column.iter().position(Option::is_some) {
            Some(top) => column[top..].iter().filter(|cell| cell.is_none()).count(),
            None => 0,
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Check if the board is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Row-major copy of the grid as numeric tags (see [`Block::tag`])
    pub fn to_tag_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|y| {
                (0..self.cols)
                    .map(|x| crate::types::cell_tag(self.column(x)[y]))
                    .collect()
            })
            .collect()
    }
}
