//! Parsed map grid

use alloc::vec::Vec;

use crate::format::constants::{FIRST_ROW_LINE, LINE_TERMINATOR};
use crate::validation::{validate_row, validate_row_length};
use crate::{FormatError, Legend};

/// A fully validated map
///
/// Cells are stored row-major in one contiguous buffer. Every `Map` has at
/// least one row and one column, every row has `cols` cells, and every cell
/// is one of the legend characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    rows: usize,
    cols: usize,
    legend: Legend,
    cells: Vec<u8>,
}

impl Map {
    /// Wrap a buffer the parser has already checked
    pub(crate) fn from_validated(rows: usize, cols: usize, legend: Legend, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self {
            rows,
            cols,
            legend,
            cells,
        }
    }

    /// Build a map from in-memory rows, applying the same checks as the parser
    pub fn from_rows<R: AsRef<[u8]>>(legend: Legend, rows: &[R]) -> Result<Self, FormatError> {
        let first = rows
            .first()
            .ok_or(FormatError::Eof {
                line: FIRST_ROW_LINE,
            })?
            .as_ref();
        if first.is_empty() {
            return Err(FormatError::EmptyGrid);
        }

        let cols = first.len();
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let line = FIRST_ROW_LINE + index;
            validate_row_length(row, cols, line)?;
            validate_row(row, &legend, line)?;
            cells.extend_from_slice(row);
        }

        Ok(Self::from_validated(rows.len(), cols, legend, cells))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get map dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Get the cell at the specified position
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Whether the cell at the specified position is `empty`
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(self.legend.empty)
    }

    /// Get one row of cells
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate over rows in order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// Number of cells holding `byte`
    pub fn count(&self, byte: u8) -> usize {
        self.cells.iter().filter(|&&b| b == byte).count()
    }

    /// Serialize the grid as newline-terminated rows
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.rows * (self.cols + 1));
        for row in self.iter_rows() {
            out.extend_from_slice(row);
            out.push(LINE_TERMINATOR);
        }
        out
    }
}
