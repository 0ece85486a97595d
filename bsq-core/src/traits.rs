//! Core traits for reading maps

use crate::FormatError;

/// A source of physical lines, pulled one at a time by the parser
///
/// Implementations strip a single trailing `\n` from each line. Any other
/// byte, including `\r`, is part of the line.
pub trait LineSource {
    /// Error raised by the underlying input; the parser reports its own
    /// failures through the `From<FormatError>` conversion
    type Error: From<FormatError>;

    /// Read the next line, or `None` once the input is exhausted
    fn next_line(&mut self) -> Result<Option<&[u8]>, Self::Error>;
}
