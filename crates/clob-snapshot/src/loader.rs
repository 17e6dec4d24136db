//! Snapshot format selection and file loading.

use std::fs;
use std::path::Path;

use clob_core::Book;
use tracing::debug;

use crate::error::SnapshotError;
use crate::{csv_codec, json_codec};

/// On-disk snapshot encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// `.json` files are JSON depth payloads; everything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Csv,
        }
    }
}

/// Parse snapshot text already in memory.
pub fn parse_snapshot(input: &str, format: Format) -> Result<Book, SnapshotError> {
    let book = match format {
        Format::Csv => csv_codec::parse_book(input)?,
        Format::Json => json_codec::parse_book(input)?,
    };
    debug!(
        ?format,
        bids = book.bids.len(),
        asks = book.asks.len(),
        "parsed snapshot"
    );
    Ok(book)
}

/// Read and parse the snapshot at `path`, picking the format from its
/// extension.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Book, SnapshotError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_snapshot(&input, Format::from_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::from_path(Path::new("book.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("BOOK.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("book.csv")), Format::Csv);
        assert_eq!(Format::from_path(Path::new("book")), Format::Csv);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let path = PathBuf::from("definitely/not/here.csv");
        match load_snapshot(&path) {
            Err(SnapshotError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn parse_dispatches_on_format() {
        let csv = parse_snapshot("B, 1, 2\n", Format::Csv).unwrap();
        assert_eq!(csv.bids.len(), 1);
        let json = parse_snapshot(r#"{"bids": [], "asks": [[1, 2]]}"#, Format::Json).unwrap();
        assert_eq!(json.asks.len(), 1);
    }
}
