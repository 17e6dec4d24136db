//! CSV level snapshots.
//!
//! One level per line:
//!
//! - Bid:
//!   `B, price(float), volume(float)`
//!
//! - Ask:
//!   `A, price(float), volume(float)`
//!
//! Blank lines and lines starting with `#` are ignored. Line order does
//! not matter; the engine sorts on render.

use clob_core::{Book, Level, Side};

use crate::error::{validate_level, SnapshotError};

/// Parse a single CSV line into a side and level.
///
/// Returns `Ok(None)` for blank lines or comments.
pub fn parse_level_line(line: &str) -> Result<Option<(Side, Level)>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = split_and_trim(trimmed, ',');
    if tokens.len() != 3 {
        return Err(format!("expected 3 fields, found {}", tokens.len()));
    }

    let side = match tokens[0] {
        "B" | "b" => Side::Bid,
        "A" | "a" => Side::Ask,
        other => return Err(format!("unknown side {other:?}, expected B or A")),
    };
    let price = parse_f64(tokens[1], "price")?;
    let volume = parse_f64(tokens[2], "volume")?;

    validate_level(price, volume).map(|level| Some((side, level)))
}

/// Parse a whole CSV snapshot. Errors carry 1-based line numbers.
pub fn parse_book(input: &str) -> Result<Book, SnapshotError> {
    let mut book = Book::default();

    for (idx, raw_line) in input.lines().enumerate() {
        let parsed = parse_level_line(raw_line).map_err(|reason| SnapshotError::Csv {
            line: idx + 1,
            reason,
        })?;

        match parsed {
            Some((Side::Bid, level)) => book.bids.push(level),
            Some((Side::Ask, level)) => book.asks.push(level),
            None => {}
        }
    }

    Ok(book)
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn split_and_trim(s: &str, delimiter: char) -> Vec<&str> {
    s.split(delimiter).map(str::trim).collect()
}

fn parse_f64(s: &str, field: &str) -> Result<f64, String> {
    s.parse::<f64>()
        .map_err(|e| format!("invalid {field} {s:?}: {e}"))
}
