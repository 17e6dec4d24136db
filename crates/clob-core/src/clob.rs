//! The order-book ladder engine.
//!
//! `Clob` owns a book snapshot plus display settings and turns them into a
//! [`Panel`] for a given viewport:
//!
//! 1. sort copies of both sides for the orientation,
//! 2. truncate each side to the rows the viewport holds,
//! 3. scale bars against the largest visible volume,
//! 4. compose rows and lay them out,
//! 5. center the result in the viewport.
//!
//! Rendering borrows the engine immutably and never fails.

use tracing::trace;

use crate::depth::DepthLimit;
use crate::layout::{self, Viewport};
use crate::level::Book;
use crate::ordering::sort_book;
use crate::orientation::{Alignment, Orientation};
use crate::panel::Panel;
use crate::row::Precision;
use crate::scaling::max_volume;

/// Shown instead of a layout while the viewport has no width.
pub const PLACEHOLDER: &str = "Initializing...";

/// Order-book ladder state: the current book, display settings and the
/// last viewport size reported through [`Clob::resize`].
///
/// Settings are plain fields; change them directly between renders.
#[derive(Debug, Clone)]
pub struct Clob {
    width: u16,
    height: u16,

    /// Current snapshot. Replaced wholesale on refresh.
    pub book: Book,

    pub orientation: Orientation,

    /// Bar edge for stacked layouts. Ignored side-by-side.
    pub alignment: Alignment,

    /// Blank columns between bids and asks side-by-side.
    pub spacing: usize,

    pub price_precision: usize,
    pub volume_precision: usize,
}

impl Default for Clob {
    fn default() -> Self {
        Clob::new()
    }
}

impl Clob {
    pub fn new() -> Self {
        Clob {
            width: 0,
            height: 0,
            book: Book::default(),
            orientation: Orientation::SideBySide,
            alignment: Alignment::BarLeft,
            spacing: 1,
            price_precision: 2,
            volume_precision: 2,
        }
    }

    /// Replace the book, returning the previous one.
    pub fn set_book(&mut self, book: Book) -> Book {
        std::mem::replace(&mut self.book, book)
    }

    /// Record the size used by [`Clob::view`]. Has no other effect.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Last size reported through [`Clob::resize`].
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn precision(&self) -> Precision {
        Precision {
            price: self.price_precision,
            volume: self.volume_precision,
        }
    }

    /// Render at the last size reported through [`Clob::resize`].
    pub fn view(&self) -> Panel {
        self.view_with(self.viewport())
    }

    /// Render into `viewport`.
    ///
    /// Every line of the result is exactly `viewport.width` cells wide. With
    /// a non-zero height the result has exactly `viewport.height` lines. A
    /// zero width yields [`PLACEHOLDER`].
    pub fn view_with(&self, viewport: Viewport) -> Panel {
        if viewport.width == 0 {
            return Panel::placeholder(PLACEHOLDER);
        }

        let width = usize::from(viewport.width);
        let sorted = sort_book(&self.book, self.orientation);
        let limit = DepthLimit::for_height(viewport.height, self.orientation);
        let visible = limit.apply(&sorted, self.orientation);
        let max_volume = max_volume(visible.bids, visible.asks);

        trace!(
            orientation = ?self.orientation,
            width = viewport.width,
            height = viewport.height,
            bids = visible.bids.len(),
            asks = visible.asks.len(),
            max_volume,
            "rendering book"
        );

        let panel = match self.orientation {
            Orientation::SideBySide => {
                layout::side_by_side(&visible, width, self.spacing, self.precision(), max_volume)
            }
            Orientation::Stacked => layout::stacked(
                &visible,
                self.book.spread(),
                width,
                self.alignment,
                self.precision(),
                max_volume,
            ),
        };

        layout::place(panel, viewport)
    }
}
