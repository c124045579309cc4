//! Line parsers for the coordinate text format
//!
//! Pure string parsing with no I/O dependencies. The `smtx` crate feeds
//! these one line at a time while reading a matrix file.

use crate::{MatrixError, Result};

/// Parse a header line of the form `key=<digits>`
///
/// The full line is trimmed before matching, but no whitespace is allowed
/// around the keyword or the `=` itself.
pub fn parse_dimension(line: &str, key: &str) -> Result<usize> {
    let line = line.trim();
    let rest = line
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or(MatrixError::InvalidHeader)?;
    parse_unsigned(rest).ok_or(MatrixError::InvalidHeader)
}

/// Parse a data line of the form `(<row>, <col>, <value>)`
///
/// Row and column are non-negative; the value may carry a leading minus.
/// Whitespace around the comma-separated fields is tolerated.
pub fn parse_entry(line: &str) -> Result<(usize, usize, i64)> {
    let body = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(MatrixError::InvalidEntry)?;

    let mut fields = body.split(',');
    let row = fields.next().and_then(|s| parse_unsigned(s.trim()));
    let col = fields.next().and_then(|s| parse_unsigned(s.trim()));
    let value = fields.next().and_then(|s| parse_signed(s.trim()));

    match (row, col, value, fields.next()) {
        (Some(row), Some(col), Some(value), None) => Ok((row, col, value)),
        _ => Err(MatrixError::InvalidEntry),
    }
}

/// Parse a run of ASCII digits, rejecting anything else
fn parse_unsigned(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse an optionally minus-prefixed run of ASCII digits
fn parse_signed(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
