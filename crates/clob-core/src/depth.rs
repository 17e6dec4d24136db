//! Depth truncation: how many levels of each side fit the viewport.

use crate::level::Level;
use crate::ordering::SortedBook;
use crate::orientation::Orientation;

/// Per-side row budget.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DepthLimit {
    /// Show every level.
    Unbounded,
    /// Show at most this many levels per side.
    Rows(usize),
}

impl DepthLimit {
    /// Row budget for a viewport of `height` rows.
    ///
    /// A height of `0` means no limit. Stacked layouts reserve one row for
    /// the spread and split the rest evenly; a stacked viewport of one or
    /// two rows therefore fits no levels at all.
    pub fn for_height(height: u16, orientation: Orientation) -> Self {
        if height == 0 {
            return DepthLimit::Unbounded;
        }
        let height = usize::from(height);
        match orientation {
            Orientation::SideBySide => DepthLimit::Rows(height),
            Orientation::Stacked => DepthLimit::Rows((height - 1) / 2),
        }
    }

    /// Select the visible levels of an already sorted book.
    ///
    /// Bids (and side-by-side asks) keep their leading levels. Stacked asks
    /// are sorted descending, so their best levels are the trailing ones.
    pub fn apply(self, sorted: &SortedBook, orientation: Orientation) -> VisibleBook<'_> {
        let DepthLimit::Rows(rows) = self else {
            return VisibleBook {
                bids: &sorted.bids,
                asks: &sorted.asks,
            };
        };

        let bids = head(&sorted.bids, rows);
        let asks = match orientation {
            Orientation::SideBySide => head(&sorted.asks, rows),
            Orientation::Stacked => tail(&sorted.asks, rows),
        };
        VisibleBook { bids, asks }
    }
}

/// The levels that will actually be drawn, borrowed from a [`SortedBook`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleBook<'a> {
    pub bids: &'a [Level],
    pub asks: &'a [Level],
}

fn head(levels: &[Level], rows: usize) -> &[Level] {
    &levels[..rows.min(levels.len())]
}

fn tail(levels: &[Level], rows: usize) -> &[Level] {
    &levels[levels.len().saturating_sub(rows)..]
}
