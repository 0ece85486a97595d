//! Biggest-square solver
//!
//! `dp[i][j]` is the side of the largest all-empty square whose bottom-right
//! corner is `(i, j)`:
//!
//! - `0` when the cell is not empty
//! - `1` when the cell is empty and on the first row or column
//! - `1 + min(up, left, up-left)` otherwise
//!
//! Cells are scanned row-major. Among squares of equal size the one with the
//! smallest top-left corner (row, then column) wins.

use alloc::vec;
use alloc::vec::Vec;

use crate::Map;

/// Location and size of a square, given by its bottom-right corner
///
/// A size of 0 means the map has no empty cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestSquare {
    pub bottom_row: usize,
    pub bottom_col: usize,
    pub size: usize,
}

impl BestSquare {
    pub const fn new(bottom_row: usize, bottom_col: usize, size: usize) -> Self {
        Self {
            bottom_row,
            bottom_col,
            size,
        }
    }

    /// No square was found
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Top-left corner as (row, col)
    pub const fn top_left(&self) -> (usize, usize) {
        (
            self.bottom_row + 1 - self.size,
            self.bottom_col + 1 - self.size,
        )
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.size * self.size
    }

    /// Whether the square covers the cell at (row, col)
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        let (top, left) = self.top_left();
        !self.is_empty()
            && row >= top
            && row <= self.bottom_row
            && col >= left
            && col <= self.bottom_col
    }

    /// Whether this candidate should replace `current`
    ///
    /// Larger squares win; equal sizes are ordered by top-left corner.
    pub fn beats(&self, current: &BestSquare) -> bool {
        self.size > current.size
            || (self.size == current.size && self.top_left() < current.top_left())
    }
}

/// Dynamic-programming table over a map, row-major like the map itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    rows: usize,
    cols: usize,
    values: Vec<usize>,
}

impl DpTable {
    /// Compute the table for a map
    pub fn build(map: &Map) -> Self {
        scan(map).0
    }

    /// Get the value at the specified position
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.values[row * self.cols + col])
    }

    /// Get table dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Largest value in the table
    pub fn max(&self) -> usize {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

/// Find the biggest square of empty cells
pub fn solve(map: &Map) -> BestSquare {
    scan(map).1
}

fn scan(map: &Map) -> (DpTable, BestSquare) {
    let (rows, cols) = map.dimensions();
    let empty = map.legend().empty;
    let mut values = vec![0usize; rows * cols];
    let mut best = BestSquare::default();

    for (i, row) in map.iter_rows().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            let idx = i * cols + j;
            let size = if cell != empty {
                0
            } else if i == 0 || j == 0 {
                1
            } else {
                let up = values[idx - cols];
                let left = values[idx - 1];
                let diag = values[idx - cols - 1];
                1 + up.min(left).min(diag)
            };
            values[idx] = size;

            let candidate = BestSquare::new(i, j, size);
            if candidate.beats(&best) {
                best = candidate;
            }
        }
    }

    (DpTable { rows, cols, values }, best)
}
