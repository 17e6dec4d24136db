//! clob-snapshot
//!
//! Loads order-book snapshots into [`clob_core::Book`] values:
//! - CSV level files (`B, price, volume` / `A, price, volume`)
//! - JSON depth payloads (`{"bids": [[price, volume, ...]], "asks": ...}`),
//!   bare or wrapped in an exchange `{"error": [], "result": {..}}` envelope
//!
//! Every level is validated here (finite price, finite non-negative
//! volume) so books handed to the engine are always well-formed.

pub mod csv_codec;
pub mod error;
pub mod json_codec;
pub mod loader;

pub use error::SnapshotError;
pub use loader::{load_snapshot, parse_snapshot, Format};
