//! Price levels and whole-book snapshots.

/// A single price level: a price and the volume resting at it.
///
/// Prices must be finite and volumes finite and non-negative. The engine
/// does not check this; snapshot loaders reject such values before a book
/// is handed over.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Level {
    pub price: f64,
    pub volume: f64,
}

impl Level {
    pub fn new(price: f64, volume: f64) -> Self {
        Level { price, volume }
    }
}

/// Both sides of a book, in whatever order the caller produced them.
///
/// The engine keeps its own copy and is handed a fresh `Book` on every
/// refresh; there is no incremental merging.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Book {
    pub bids: Vec<Level>,
    pub asks: Vec<Level>,
}

impl Book {
    pub fn new(bids: Vec<Level>, asks: Vec<Level>) -> Self {
        Book { bids, asks }
    }

    /// Returns `true` if there are no levels on either side.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Highest bid price, if any.
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.iter().map(|l| l.price).reduce(f64::max)
    }

    /// Lowest ask price, if any.
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.iter().map(|l| l.price).reduce(f64::min)
    }

    /// `best_ask - best_bid`, or `None` when either side is empty.
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }
}

impl From<(f64, f64)> for Level {
    fn from((price, volume): (f64, f64)) -> Self {
        Level::new(price, volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Book {
        Book::new(
            vec![(98.0, 20.0).into(), (99.0, 1.0).into(), (97.0, 40.0).into()],
            vec![(101.0, 10.0).into(), (100.0, 5.0).into(), (102.0, 20.0).into()],
        )
    }

    #[test]
    fn best_prices_ignore_input_order() {
        let book = book();
        assert_eq!(book.best_bid(), Some(99.0));
        assert_eq!(book.best_ask(), Some(100.0));
        assert_eq!(book.spread(), Some(1.0));
    }

    #[test]
    fn spread_needs_both_sides() {
        let mut book = book();
        book.asks.clear();
        assert!(book.spread().is_none());
        assert!(!book.is_empty());

        book.bids.clear();
        assert!(book.is_empty());
        assert!(book.best_bid().is_none());
    }
}
