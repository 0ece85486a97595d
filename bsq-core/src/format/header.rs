//! Map header and legend definitions

use super::constants::{LEGEND_LEN, MIN_HEADER_LEN};
use crate::validation::parse_row_count;
use crate::FormatError;

/// The three characters a map is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Legend {
    /// Cell free to be part of the square
    pub empty: u8,
    /// Blocked cell
    pub obstacle: u8,
    /// Marker painted over the winning square
    pub full: u8,
}

impl Legend {
    /// Create a legend, rejecting repeated characters
    pub const fn new(empty: u8, obstacle: u8, full: u8) -> Result<Self, FormatError> {
        if empty == obstacle || empty == full || obstacle == full {
            return Err(FormatError::Header);
        }
        Ok(Self {
            empty,
            obstacle,
            full,
        })
    }

    /// Whether `byte` is one of the three legend characters
    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        byte == self.empty || byte == self.obstacle || byte == self.full
    }

    /// Legend characters in header order
    pub const fn as_bytes(&self) -> [u8; LEGEND_LEN] {
        [self.empty, self.obstacle, self.full]
    }
}

/// Parsed first line of a map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapHeader {
    /// Declared number of grid rows, always positive
    pub rows: usize,
    pub legend: Legend,
}

impl MapHeader {
    /// Parse a header line with its terminator already removed
    ///
    /// The last three bytes are the legend in the order empty, obstacle,
    /// full. Everything before them must be a positive decimal row count.
    pub fn parse(line: &[u8]) -> Result<Self, FormatError> {
        if line.len() < MIN_HEADER_LEN {
            return Err(FormatError::Header);
        }

        let (digits, legend) = line.split_at(line.len() - LEGEND_LEN);
        let legend = Legend::new(legend[0], legend[1], legend[2])?;
        let rows = parse_row_count(digits)?;

        Ok(Self { rows, legend })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let header = MapHeader::parse(b"9.ox").unwrap();
        assert_eq!(header.rows, 9);
        assert_eq!(header.legend, Legend::new(b'.', b'o', b'x').unwrap());

        let header = MapHeader::parse(b"120 #*").unwrap();
        assert_eq!(header.rows, 120);
        assert_eq!(header.legend.as_bytes(), *b" #*");
    }

    #[test]
    fn test_digits_in_legend() {
        // Only the last three bytes are the legend, even when they are digits
        let header = MapHeader::parse(b"10123").unwrap();
        assert_eq!(header.rows, 10);
        assert_eq!(header.legend.as_bytes(), *b"123");
    }

    #[test]
    fn test_invalid_headers() {
        assert_eq!(MapHeader::parse(b""), Err(FormatError::Header));
        assert_eq!(MapHeader::parse(b".o*"), Err(FormatError::Header));
        assert_eq!(MapHeader::parse(b"0.o*"), Err(FormatError::Header));
        assert_eq!(MapHeader::parse(b"000.o*"), Err(FormatError::Header));
        assert_eq!(MapHeader::parse(b"-3.o*"), Err(FormatError::Header));
        assert_eq!(MapHeader::parse(b"+3.o*"), Err(FormatError::Header));
        assert_eq!(MapHeader::parse(b" 3.o*"), Err(FormatError::Header));
        assert_eq!(MapHeader::parse(b"3a.o*"), Err(FormatError::Header));
    }

    #[test]
    fn test_duplicate_legend() {
        assert_eq!(MapHeader::parse(b"3..*"), Err(FormatError::Header));
        assert_eq!(MapHeader::parse(b"3.o."), Err(FormatError::Header));
        assert_eq!(MapHeader::parse(b"3.oo"), Err(FormatError::Header));
    }

    #[test]
    fn test_legend_contains() {
        let legend = Legend::new(b'.', b'o', b'x').unwrap();
        assert!(legend.contains(b'.'));
        assert!(legend.contains(b'o'));
        assert!(legend.contains(b'x'));
        assert!(!legend.contains(b'*'));
        assert!(!legend.contains(b'\r'));
    }
}
