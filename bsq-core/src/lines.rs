//! Line splitting over in-memory buffers

use crate::format::constants::LINE_TERMINATOR;
use crate::{FormatError, LineSource};

/// Lines of a byte slice, such as a memory-mapped file
///
/// A final line without terminator is still yielded; a trailing terminator
/// does not produce an extra empty line.
#[derive(Debug, Clone)]
pub struct SliceLines<'a> {
    remaining: &'a [u8],
}

impl<'a> SliceLines<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { remaining: data }
    }

    /// Bytes not consumed yet
    pub const fn remaining(&self) -> &'a [u8] {
        self.remaining
    }
}

impl<'a> Iterator for SliceLines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining;
        if remaining.is_empty() {
            return None;
        }

        match remaining.iter().position(|&b| b == LINE_TERMINATOR) {
            Some(end) => {
                self.remaining = &remaining[end + 1..];
                Some(&remaining[..end])
            }
            None => {
                self.remaining = &[];
                Some(remaining)
            }
        }
    }
}

impl LineSource for SliceLines<'_> {
    type Error = FormatError;

    fn next_line(&mut self) -> Result<Option<&[u8]>, FormatError> {
        Ok(self.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_split_lines() {
        let lines: Vec<&[u8]> = SliceLines::new(b"ab\ncd\n").collect();
        assert_eq!(lines, [&b"ab"[..], &b"cd"[..]]);

        let lines: Vec<&[u8]> = SliceLines::new(b"ab\ncd").collect();
        assert_eq!(lines, [&b"ab"[..], &b"cd"[..]]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let lines: Vec<&[u8]> = SliceLines::new(b"\n\nx\n").collect();
        assert_eq!(lines, [&b""[..], &b""[..], &b"x"[..]]);
    }

    #[test]
    fn test_only_newline_is_stripped() {
        let mut lines = SliceLines::new(b"ab\r\n");
        assert_eq!(lines.next_line(), Ok(Some(&b"ab\r"[..])));
        assert_eq!(lines.next_line(), Ok(None));
    }

    #[test]
    fn test_empty_input() {
        let mut lines = SliceLines::new(b"");
        assert_eq!(lines.next_line(), Ok(None));
        assert!(lines.remaining().is_empty());
    }
}
