//! Error types for map parsing

/// Reasons a map is rejected by the parser
///
/// Line and column numbers are 1-based; the header is line 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Malformed header: too short, non-numeric or zero row count, or a
    /// legend with repeated characters
    Header,
    /// The first data row is empty
    EmptyGrid,
    /// A data row differs in length from the first one
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A cell is not one of the three legend characters
    InvalidChar { line: usize, column: usize, byte: u8 },
    /// The source ended before every declared row was read
    Eof { line: usize },
}

impl FormatError {
    /// Short name of the error kind, without its context
    pub const fn kind(&self) -> &'static str {
        match self {
            FormatError::Header => "header",
            FormatError::EmptyGrid => "empty grid",
            FormatError::RowLength { .. } => "row length",
            FormatError::InvalidChar { .. } => "invalid character",
            FormatError::Eof { .. } => "unexpected end of input",
        }
    }
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::Header => write!(f, "Invalid map header"),
            FormatError::EmptyGrid => write!(f, "First map row is empty"),
            FormatError::RowLength {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {line}: expected {expected} cells, found {found}"
            ),
            FormatError::InvalidChar { line, column, byte } => write!(
                f,
                "Line {line}, column {column}: byte 0x{byte:02x} is not in the legend"
            ),
            FormatError::Eof { line } => {
                write!(f, "Input ended before line {line}")
            }
        }
    }
}

impl core::error::Error for FormatError {}

/// Result type for map parsing
pub type Result<T> = core::result::Result<T, FormatError>;
