//! JSON depth payloads.
//!
//! Accepts the depth shape exchange REST APIs return, either bare:
//!
//! ```json
//! {"bids": [["99.0", "1.5", 1700000000]], "asks": [["100.0", "2", 1700000000]]}
//! ```
//!
//! or wrapped in a `{"error": [...], "result": {"<pair>": {...}}}` envelope.
//! Prices and volumes may be JSON strings or numbers; anything after the
//! first two entry items (timestamps, counts) is ignored.

use std::collections::BTreeMap;

use clob_core::{Book, Level};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{validate_level, SnapshotError};

#[derive(Debug, Deserialize)]
struct RawDepth {
    bids: Vec<Vec<Value>>,
    asks: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Envelope {
        #[serde(default)]
        error: Vec<String>,
        result: BTreeMap<String, RawDepth>,
    },
    Depth(RawDepth),
}

/// Parse a JSON depth payload into a book.
pub fn parse_book(input: &str) -> Result<Book, SnapshotError> {
    let raw = match serde_json::from_str::<Payload>(input)? {
        Payload::Depth(raw) => raw,
        Payload::Envelope { error, result } => {
            if !error.is_empty() {
                return Err(SnapshotError::Exchange(error));
            }
            result
                .into_values()
                .next()
                .ok_or(SnapshotError::MissingBook)?
        }
    };

    Ok(Book::new(
        convert_side(&raw.bids, "bid")?,
        convert_side(&raw.asks, "ask")?,
    ))
}

fn convert_side(entries: &[Vec<Value>], side: &'static str) -> Result<Vec<Level>, SnapshotError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            convert_entry(entry).map_err(|reason| SnapshotError::Depth { side, index, reason })
        })
        .collect()
}

fn convert_entry(entry: &[Value]) -> Result<Level, String> {
    let [price, volume, ..] = entry else {
        return Err(format!("expected [price, volume, ...], found {} items", entry.len()));
    };
    validate_level(number(price, "price")?, number(volume, "volume")?)
}

fn number(value: &Value, field: &str) -> Result<f64, String> {
    match value {
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid {field} {s:?}: {e}")),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| format!("{field} {n} does not fit a float")),
        other => Err(format!("{field} must be a string or number, found {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_depth_with_strings_and_numbers() {
        let input = r#"{
            "bids": [["99.0", "1.5", 1700000000], [98, 20]],
            "asks": [["100.25", "0.00000001", 1700000001]]
        }"#;
        let book = parse_book(input).unwrap();
        assert_eq!(book.bids, vec![Level::new(99.0, 1.5), Level::new(98.0, 20.0)]);
        assert_eq!(book.asks, vec![Level::new(100.25, 0.00000001)]);
    }

    #[test]
    fn unwraps_exchange_envelope() {
        let input = r#"{"error": [], "result": {"XXBTZUSD": {
            "asks": [["64000.1", "0.5", 1]],
            "bids": [["63999.9", "1.25", 1]]
        }}}"#;
        let book = parse_book(input).unwrap();
        assert_eq!(book.best_ask(), Some(64000.1));
        assert_eq!(book.best_bid(), Some(63999.9));
    }

    #[test]
    fn surfaces_exchange_errors() {
        let input = r#"{"error": ["EQuery:Unknown asset pair"], "result": {}}"#;
        match parse_book(input) {
            Err(SnapshotError::Exchange(errors)) => {
                assert_eq!(errors, vec!["EQuery:Unknown asset pair".to_string()])
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_result_has_no_book() {
        let input = r#"{"error": [], "result": {}}"#;
        assert!(matches!(parse_book(input), Err(SnapshotError::MissingBook)));
    }

    #[test]
    fn rejects_short_and_invalid_entries() {
        let short = r#"{"bids": [["99.0"]], "asks": []}"#;
        match parse_book(short) {
            Err(SnapshotError::Depth { side, index, .. }) => {
                assert_eq!(side, "bid");
                assert_eq!(index, 0);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let negative = r#"{"bids": [], "asks": [["1", "2"], ["100", "-1"]]}"#;
        match parse_book(negative) {
            Err(SnapshotError::Depth { side, index, reason }) => {
                assert_eq!(side, "ask");
                assert_eq!(index, 1);
                assert!(reason.contains("negative"));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let boolean = r#"{"bids": [[true, "1"]], "asks": []}"#;
        assert!(parse_book(boolean).is_err());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(parse_book("{not json"), Err(SnapshotError::Json(_))));
    }
}
