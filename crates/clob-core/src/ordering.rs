//! Display ordering of book sides.
//!
//! Sorting always works on copies: the engine's own `Book` (and anything
//! the caller still holds) keeps its original order across renders.

use std::cmp::Ordering;

use crate::level::{Book, Level};
use crate::orientation::Orientation;

/// Both sides of a book in display order for one orientation.
///
/// - `SideBySide`: bids descending, asks ascending (best levels first).
/// - `Stacked`: bids descending, asks descending (best ask last, so it
///   ends up just above the spread row).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortedBook {
    pub bids: Vec<Level>,
    pub asks: Vec<Level>,
}

/// Sort copies of both sides for `orientation`.
///
/// Sorting is stable: levels with equal prices keep their input order.
pub fn sort_book(book: &Book, orientation: Orientation) -> SortedBook {
    let mut bids = book.bids.clone();
    let mut asks = book.asks.clone();

    bids.sort_by(descending);
    match orientation {
        Orientation::SideBySide => asks.sort_by(ascending),
        Orientation::Stacked => asks.sort_by(descending),
    }

    SortedBook { bids, asks }
}

fn ascending(a: &Level, b: &Level) -> Ordering {
    a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
}

fn descending(a: &Level, b: &Level) -> Ordering {
    ascending(b, a)
}
