//! Snapshot loading errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV line is malformed or holds an invalid level.
    #[error("line {line}: {reason}")]
    Csv { line: usize, reason: String },

    /// The JSON payload does not have the expected shape.
    #[error("malformed depth payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON depth entry is malformed or holds an invalid level.
    #[error("{side} entry {index}: {reason}")]
    Depth {
        side: &'static str,
        index: usize,
        reason: String,
    },

    /// The payload carried exchange-reported errors instead of a book.
    #[error("exchange returned errors: {}", .0.join(", "))]
    Exchange(Vec<String>),

    /// An envelope with no book in its result.
    #[error("no book found in depth payload")]
    MissingBook,
}

/// Check a parsed level before it enters a book.
pub(crate) fn validate_level(price: f64, volume: f64) -> Result<clob_core::Level, String> {
    if !price.is_finite() {
        return Err(format!("price {price} is not finite"));
    }
    if !volume.is_finite() {
        return Err(format!("volume {volume} is not finite"));
    }
    if volume < 0.0 {
        return Err(format!("volume {volume} is negative"));
    }
    Ok(clob_core::Level::new(price, volume))
}
