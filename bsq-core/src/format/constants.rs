//! Format constants for the map header and grid

/// Line terminator stripped from every physical line
pub const LINE_TERMINATOR: u8 = b'\n';

/// Number of legend characters at the end of the header
pub const LEGEND_LEN: usize = 3;

/// Shortest valid header: one digit plus the legend
pub const MIN_HEADER_LEN: usize = LEGEND_LEN + 1;

/// Physical line number of the header
pub const HEADER_LINE: usize = 1;

/// Physical line number of grid row 0
pub const FIRST_ROW_LINE: usize = HEADER_LINE + 1;
