//! Grid row validation

use crate::{FormatError, Legend};

/// Check that a row has exactly `expected` cells
///
/// `line` is the physical line number reported on failure.
pub const fn validate_row_length(
    row: &[u8],
    expected: usize,
    line: usize,
) -> Result<(), FormatError> {
    if row.len() != expected {
        return Err(FormatError::RowLength {
            line,
            expected,
            found: row.len(),
        });
    }
    Ok(())
}

/// Check that every cell of a row belongs to the legend
pub fn validate_row(row: &[u8], legend: &Legend, line: usize) -> Result<(), FormatError> {
    match row.iter().position(|&b| !legend.contains(b)) {
        Some(index) => Err(FormatError::InvalidChar {
            line,
            column: index + 1,
            byte: row[index],
        }),
        None => Ok(()),
    }
}
