//! Grid module - the 4x4 playfield and the slide/merge algorithm
//!
//! The grid is a flat row-major array of 16 cells. `0` is an empty cell, any
//! other value is a tile (a power of two).
//! Coordinates: (row, col) with row 0 at the top and col 0 at the left;
//! the linear index of a cell is `row * 4 + col`.
//!
//! A move is applied line by line. For each row (Left/Right) or column
//! (Up/Down) the cells are visited from the near edge (the side tiles are
//! pushed toward) to the far edge:
//!
//! 1. compact: nonzero cells slide to the near edge, keeping their order
//! 2. merge: each adjacent equal pair doubles into the nearer cell and the
//!    farther cell becomes empty
//! 3. compact again to close the gaps left by merges
//!
//! A merged-away cell is zero by the time the scan reaches it, so no tile
//! takes part in more than one merge per move.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::types::{Direction, CELL_COUNT, GRID_SIZE};

/// Cell indices of one line, ordered from the near edge to the far edge
type Line = [usize; GRID_SIZE];

/// The 4x4 game grid using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * 4 + col)
    cells: [u32; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a grid from rows, top row first
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]);
    /// assert_eq!(grid.get(0, 0), Some(2));
    /// assert_eq!(grid.get(3, 3), Some(4));
    /// ```
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut cells = [0; CELL_COUNT];
        for (row, values) in rows.iter().enumerate() {
            cells[row * GRID_SIZE..(row + 1) * GRID_SIZE].copy_from_slice(values);
        }
        Self { cells }
    }

    /// Build a grid from a flat row-major array
    pub fn from_cells(cells: [u32; CELL_COUNT]) -> Self {
        Self { cells }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get the value at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        Self::index(row, col).map(|i| self.cells[i])
    }

    /// Set the value at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match Self::index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Get the value at a linear index in `0..16`
    pub fn value_at(&self, index: usize) -> Result<u32, GridError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GridError::OutOfRange { index })
    }

    /// Write a value at a linear index that came from this grid.
    pub(crate) fn fill(&mut self, index: usize, value: u32) {
        self.cells[index] = value;
    }

    pub fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }

    /// Copy the grid out as rows, top row first
    pub fn rows(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (i, &value) in self.cells.iter().enumerate() {
            rows[i / GRID_SIZE][i % GRID_SIZE] = value;
        }
        rows
    }

    /// Linear indices of every empty cell, in ascending order
    ///
    /// Stack-only; never allocates.
    pub fn empty_cells(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == 0)
    }

    /// Sum of all cell values
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// Largest tile on the grid (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn contains(&self, value: u32) -> bool {
        self.cells.contains(&value)
    }

    /// Push every tile toward `direction`, merging equal neighbours once
    ///
    /// Returns true if any cell changed.
    pub fn slide(&mut self, direction: Direction) -> bool {
        let before = self.cells;
        for line in 0..GRID_SIZE {
            let idx = line_indices(direction, line);
            self.compact(&idx);
            self.merge(&idx);
            self.compact(&idx);
        }
        self.cells != before
    }

    /// Copy of this grid after sliding toward `direction`
    pub fn slid(&self, direction: Direction) -> Self {
        let mut next = *self;
        next.slide(direction);
        next
    }

    /// Stable partition of the line: tiles to the near edge, zeros after.
    fn compact(&mut self, idx: &Line) {
        let mut write = 0;
        for read in 0..GRID_SIZE {
            let value = self.cells[idx[read]];
            if value != 0 {
                self.cells[idx[write]] = value;
                write += 1;
            }
        }
        for &i in &idx[write..] {
            self.cells[i] = 0;
        }
    }

    fn merge(&mut self, idx: &Line) {
        for k in 0..GRID_SIZE - 1 {
            let near = self.cells[idx[k]];
            if near != 0 && near == self.cells[idx[k + 1]] {
                self.cells[idx[k]] = near.saturating_mul(2);
                self.cells[idx[k + 1]] = 0;
            }
        }
    }
}

/// Indices of line `line` (a row or a column), from near edge to far edge.
fn line_indices(direction: Direction, line: usize) -> Line {
    let mut idx = [0; GRID_SIZE];
    for (k, slot) in idx.iter_mut().enumerate() {
        let pos = if direction.is_ascending() {
            k
        } else {
            GRID_SIZE - 1 - k
        };
        *slot = if direction.is_horizontal() {
            line * GRID_SIZE + pos
        } else {
            pos * GRID_SIZE + line
        };
    }
    idx
}

impl fmt::Display for Grid {
    /// Plain text dump, one row per line, `-` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for value in row {
                if value == 0 {
                    write!(f, "{:>5}", "-")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_after(values: [u32; 4], direction: Direction) -> [u32; 4] {
        let mut grid = Grid::from_rows([values, [0; 4], [0; 4], [0; 4]]);
        grid.slide(direction);
        grid.rows()[0]
    }

    #[test]
    fn line_indices_run_near_to_far() {
        assert_eq!(line_indices(Direction::Left, 1), [4, 5, 6, 7]);
        assert_eq!(line_indices(Direction::Right, 1), [7, 6, 5, 4]);
        assert_eq!(line_indices(Direction::Up, 2), [2, 6, 10, 14]);
        assert_eq!(line_indices(Direction::Down, 2), [14, 10, 6, 2]);
    }

    #[test]
    fn compact_keeps_tile_order() {
        assert_eq!(row_after([0, 2, 0, 4], Direction::Left), [2, 4, 0, 0]);
        assert_eq!(row_after([2, 0, 4, 0], Direction::Right), [0, 0, 2, 4]);
    }

    #[test]
    fn merges_pair_then_slides_neighbour() {
        assert_eq!(row_after([2, 2, 4, 0], Direction::Left), [4, 4, 0, 0]);
    }

    #[test]
    fn three_equal_tiles_merge_from_near_edge() {
        assert_eq!(row_after([2, 2, 2, 0], Direction::Left), [4, 2, 0, 0]);
        assert_eq!(row_after([0, 2, 2, 2], Direction::Right), [0, 0, 2, 4]);
    }

    #[test]
    fn four_equal_tiles_make_two_pairs() {
        assert_eq!(row_after([2, 2, 2, 2], Direction::Left), [4, 4, 0, 0]);
        assert_eq!(row_after([4, 4, 8, 8], Direction::Right), [0, 0, 8, 16]);
    }

    #[test]
    fn merges_across_gaps_after_compaction() {
        assert_eq!(row_after([2, 0, 0, 2], Direction::Left), [4, 0, 0, 0]);
    }

    #[test]
    fn columns_slide_vertically() {
        let mut grid = Grid::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [0; 4]]);
        assert!(grid.slide(Direction::Down));
        assert_eq!(
            grid.rows(),
            [[0; 4], [0; 4], [4, 0, 0, 0], [4, 0, 0, 0]]
        );
    }

    #[test]
    fn slide_reports_unchanged_grid() {
        let mut grid = Grid::from_rows([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
        assert!(!grid.slide(Direction::Right));
        assert!(grid.slide(Direction::Left));
    }

    #[test]
    fn value_at_rejects_out_of_range() {
        let grid = Grid::new();
        assert_eq!(grid.value_at(15), Ok(0));
        assert_eq!(grid.value_at(16), Err(GridError::OutOfRange { index: 16 }));
    }

    #[test]
    fn display_marks_empty_cells() {
        let grid = Grid::from_rows([[2, 0, 0, 2048], [0; 4], [0; 4], [0; 4]]);
        let text = grid.to_string();
        assert_eq!(text.lines().next(), Some("    2    -    - 2048"));
        assert_eq!(text.lines().count(), 4);
    }
}
