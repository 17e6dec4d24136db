//! Row composition: one price level as a fixed-width, two-segment row.
//!
//! All four row variants (side-by-side bid/ask, stacked left/right bar)
//! come out of [`compose_row`], parameterized by a [`RowSpec`]:
//!
//! - `Alignment::BarLeft`: `volume, pad, price`; the bar covers the
//!   leading cells.
//! - `Alignment::BarRight`: `price, pad, volume`; the bar covers the
//!   trailing cells.

use crate::level::Level;
use crate::orientation::Alignment;
use crate::panel::{PanelLine, Segment, StyleRole};
use crate::scaling::bar_len;
use crate::side::Side;

/// Number of fractional digits for prices and volumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Precision {
    pub price: usize,
    pub volume: usize,
}

impl Default for Precision {
    fn default() -> Self {
        Precision { price: 2, volume: 2 }
    }
}

/// Which side a row belongs to and which edge its bar grows from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowSpec {
    pub side: Side,
    pub alignment: Alignment,
}

impl RowSpec {
    /// Side-by-side columns grow bid bars from the right edge (toward the
    /// spacer) and ask bars from the left edge.
    pub fn side_by_side(side: Side) -> Self {
        let alignment = match side {
            Side::Bid => Alignment::BarRight,
            Side::Ask => Alignment::BarLeft,
        };
        RowSpec { side, alignment }
    }

    pub fn stacked(side: Side, alignment: Alignment) -> Self {
        RowSpec { side, alignment }
    }
}

/// A composed row: the bar segment and the remaining off-bar segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub alignment: Alignment,
    pub bar: Segment,
    pub rest: Segment,
}

impl Row {
    /// Cells covered by the bar.
    pub fn on_len(&self) -> usize {
        self.bar.width()
    }

    pub fn width(&self) -> usize {
        self.bar.width() + self.rest.width()
    }

    /// Both segments in left-to-right order.
    pub fn segments(&self) -> [&Segment; 2] {
        match self.alignment {
            Alignment::BarLeft => [&self.bar, &self.rest],
            Alignment::BarRight => [&self.rest, &self.bar],
        }
    }

    pub fn text(&self) -> String {
        let [left, right] = self.segments();
        format!("{}{}", left.text, right.text)
    }

    pub fn into_line(self) -> PanelLine {
        let segments = match self.alignment {
            Alignment::BarLeft => vec![self.bar, self.rest],
            Alignment::BarRight => vec![self.rest, self.bar],
        };
        PanelLine::new(segments)
    }
}

/// Fixed-point decimal with exactly `precision` fractional digits.
pub fn fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Render `level` as a `width`-cell row scaled against `max_volume`.
///
/// Price and volume are separated by as much padding as fits (never
/// negative). Fields too wide for the row are clipped on the right so the
/// row is always exactly `width` cells.
pub fn compose_row(
    level: &Level,
    spec: RowSpec,
    precision: Precision,
    width: usize,
    max_volume: f64,
) -> Row {
    let price = fixed(level.price, precision.price);
    let volume = fixed(level.volume, precision.volume);

    let (first, last) = match spec.alignment {
        Alignment::BarLeft => (&volume, &price),
        Alignment::BarRight => (&price, &volume),
    };
    let pad = width.saturating_sub(first.len() + last.len());

    let mut text = String::with_capacity(first.len() + pad + last.len());
    text.push_str(first);
    text.push_str(&" ".repeat(pad));
    text.push_str(last);
    // Formatted numbers are ASCII, so byte offsets are cell offsets.
    text.truncate(width);

    let on_len = bar_len(width, level.volume, max_volume);
    let (bar, rest) = match spec.alignment {
        Alignment::BarLeft => text.split_at(on_len),
        Alignment::BarRight => {
            let (rest, bar) = text.split_at(width - on_len);
            (bar, rest)
        }
    };

    Row {
        alignment: spec.alignment,
        bar: Segment::styled(bar, spec.side.bar_role()),
        rest: Segment::styled(rest, StyleRole::OffBar),
    }
}
