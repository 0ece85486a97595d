//! Painting the winning square and serializing the map

use alloc::vec::Vec;

use crate::{BestSquare, Map};

/// Overwrite the square's cells with the legend `full` character
///
/// Returns the number of cells written, `size²`. An empty square, or one
/// that does not fit inside the map, leaves the map untouched.
pub fn paint(map: &mut Map, square: &BestSquare) -> usize {
    if square.is_empty()
        || square.bottom_row >= map.rows()
        || square.bottom_col >= map.cols()
        || square.size > square.bottom_row + 1
        || square.size > square.bottom_col + 1
    {
        return 0;
    }

    let full = map.legend().full;
    let (top, left) = square.top_left();
    for row in top..=square.bottom_row {
        map.row_mut(row)[left..=square.bottom_col].fill(full);
    }
    square.area()
}

/// Paint the square and return the map as newline-terminated rows
pub fn render(map: &mut Map, square: &BestSquare) -> Vec<u8> {
    paint(map, square);
    map.to_bytes()
}
