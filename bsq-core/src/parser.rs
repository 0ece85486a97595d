//! Map parser
//!
//! Pulls the header and exactly the declared number of rows from a
//! [`LineSource`]. Nothing past the last declared row is read. A map is only
//! returned once every row has been validated, so any failure drops the
//! partial grid.

use alloc::vec::Vec;

use crate::format::constants::{FIRST_ROW_LINE, HEADER_LINE};
use crate::validation::{validate_row, validate_row_length};
use crate::{FormatError, LineSource, Map, MapHeader, SliceLines};

/// Parse one map from a line source
pub fn parse<S: LineSource>(source: &mut S) -> Result<Map, S::Error> {
    let header = match source.next_line()? {
        Some(line) => MapHeader::parse(line)?,
        None => return Err(FormatError::Eof { line: HEADER_LINE }.into()),
    };
    let legend = header.legend;

    let first = source.next_line()?.ok_or(FormatError::Eof {
        line: FIRST_ROW_LINE,
    })?;
    if first.is_empty() {
        return Err(FormatError::EmptyGrid.into());
    }
    validate_row(first, &legend, FIRST_ROW_LINE)?;

    let cols = first.len();
    // Grown row by row: the declared count is not trusted for allocation
    let mut cells = Vec::with_capacity(cols);
    cells.extend_from_slice(first);

    for row in 1..header.rows {
        let line = FIRST_ROW_LINE + row;
        let data = source.next_line()?.ok_or(FormatError::Eof { line })?;
        validate_row_length(data, cols, line)?;
        validate_row(data, &legend, line)?;
        cells.extend_from_slice(data);
    }

    Ok(Map::from_validated(header.rows, cols, legend, cells))
}

/// Parse one map from an in-memory buffer
pub fn parse_bytes(data: &[u8]) -> Result<Map, FormatError> {
    parse(&mut SliceLines::new(data))
}

impl core::str::FromStr for Map {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bytes(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Legend;

    #[test]
    fn test_parse_example_map() {
        let map = parse_bytes(b"3.o*\n...\n.o.\n...\n").unwrap();
        assert_eq!(map.dimensions(), (3, 3));
        assert_eq!(*map.legend(), Legend::new(b'.', b'o', b'*').unwrap());
        assert_eq!(map.row(1), Some(&b".o."[..]));
    }

    #[test]
    fn test_missing_final_newline() {
        let map = parse_bytes(b"2.ox\n..\n.o").unwrap();
        assert_eq!(map.dimensions(), (2, 2));
        assert_eq!(map.row(1), Some(&b".o"[..]));
    }

    #[test]
    fn test_trailing_content_is_ignored() {
        let map = parse_bytes(b"1.ox\n...\nthis is not a map\n").unwrap();
        assert_eq!(map.dimensions(), (1, 3));

        let mut lines = SliceLines::new(b"1.ox\n...\nrest\n");
        parse(&mut lines).unwrap();
        assert_eq!(lines.remaining(), b"rest\n");
    }

    #[test]
    fn test_header_errors() {
        assert_eq!(parse_bytes(b""), Err(FormatError::Eof { line: 1 }));
        assert_eq!(parse_bytes(b".o*\n...\n"), Err(FormatError::Header));
        assert_eq!(parse_bytes(b"0.o*\n...\n"), Err(FormatError::Header));
        assert_eq!(parse_bytes(b"1..*\n...\n"), Err(FormatError::Header));
        assert_eq!(parse_bytes(b"1.o*\r\n...\n"), Err(FormatError::Header));
    }

    #[test]
    fn test_grid_errors() {
        assert_eq!(parse_bytes(b"1.o*\n"), Err(FormatError::Eof { line: 2 }));
        assert_eq!(parse_bytes(b"1.o*\n\n"), Err(FormatError::EmptyGrid));
        assert_eq!(
            parse_bytes(b"3.o*\n...\n...\n"),
            Err(FormatError::Eof { line: 4 })
        );
        assert_eq!(
            parse_bytes(b"2.o*\n...\n....\n"),
            Err(FormatError::RowLength {
                line: 3,
                expected: 3,
                found: 4
            })
        );
        assert_eq!(
            parse_bytes(b"2.o*\n.a.\n...\n"),
            Err(FormatError::InvalidChar {
                line: 2,
                column: 2,
                byte: b'a'
            })
        );
        assert_eq!(
            parse_bytes(b"2.o*\n...\n..-\n"),
            Err(FormatError::InvalidChar {
                line: 3,
                column: 3,
                byte: b'-'
            })
        );
    }

    #[test]
    fn test_full_cells_are_accepted() {
        let map = parse_bytes(b"2.o*\n.*\n*o\n").unwrap();
        assert_eq!(map.count(b'*'), 2);
    }

    #[test]
    fn test_huge_declared_count_fails_cleanly() {
        assert_eq!(
            parse_bytes(b"99999999.o*\n...\n"),
            Err(FormatError::Eof { line: 3 })
        );
    }

    #[test]
    fn test_from_str() {
        let map: Map = "2 #@\n  \n# \n".parse().unwrap();
        assert_eq!(map.dimensions(), (2, 2));
        assert!("2 #@\n  \n".parse::<Map>().is_err());
    }
}
