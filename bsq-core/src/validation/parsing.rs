//! Parsing of the header row count

use crate::FormatError;

/// Parse the decimal row count from the header prefix
///
/// Only ASCII digits are accepted: no sign, no whitespace. The value must be
/// strictly positive and fit in a `usize`.
pub fn parse_row_count(digits: &[u8]) -> Result<usize, FormatError> {
    if digits.is_empty() {
        return Err(FormatError::Header);
    }

    let mut result: usize = 0;

    for &byte in digits {
        if !byte.is_ascii_digit() {
            return Err(FormatError::Header);
        }

        let digit = (byte - b'0') as usize;

        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(FormatError::Header)?;
    }

    if result == 0 {
        return Err(FormatError::Header);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_count() {
        assert_eq!(parse_row_count(b"1"), Ok(1));
        assert_eq!(parse_row_count(b"42"), Ok(42));
        assert_eq!(parse_row_count(b"007"), Ok(7));
        assert_eq!(parse_row_count(b"999999"), Ok(999999));

        // Invalid cases
        assert_eq!(parse_row_count(b""), Err(FormatError::Header));
        assert_eq!(parse_row_count(b"0"), Err(FormatError::Header));
        assert_eq!(parse_row_count(b"12a"), Err(FormatError::Header));
        assert_eq!(parse_row_count(b"-1"), Err(FormatError::Header));
        assert_eq!(parse_row_count(b"1 "), Err(FormatError::Header));
    }

    #[test]
    fn test_parse_row_count_overflow() {
        // One more digit than usize::MAX can hold
        let too_big = b"999999999999999999999999";
        assert_eq!(parse_row_count(too_big), Err(FormatError::Header));
    }
}
