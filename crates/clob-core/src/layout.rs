//! Panel layouts and viewport placement.

use crate::depth::VisibleBook;
use crate::level::Level;
use crate::orientation::Alignment;
use crate::panel::{Panel, PanelLine, Segment, StyleRole};
use crate::row::{compose_row, fixed, Precision, RowSpec};
use crate::side::Side;

/// Target size of a render, in character cells.
///
/// `height == 0` places no limit on depth and adds no vertical padding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Viewport { width, height }
    }
}

/// Bid and ask columns next to each other, best levels on the top row.
///
/// Each column is `(width - spacing) / 2` cells; the shorter column is
/// filled with blank rows.
pub fn side_by_side(
    visible: &VisibleBook<'_>,
    width: usize,
    spacing: usize,
    precision: Precision,
    max_volume: f64,
) -> Panel {
    let column = width.saturating_sub(spacing) / 2;
    let bids = side_rows(visible.bids, RowSpec::side_by_side(Side::Bid), precision, column, max_volume);
    let asks = side_rows(visible.asks, RowSpec::side_by_side(Side::Ask), precision, column, max_volume);

    let depth = bids.len().max(asks.len());
    let mut bids = bids.into_iter();
    let mut asks = asks.into_iter();

    let lines = (0..depth)
        .map(|_| {
            let mut line = bids.next().unwrap_or_else(|| PanelLine::blank(column));
            line.push(Segment::blank(spacing));
            line.extend(asks.next().unwrap_or_else(|| PanelLine::blank(column)));
            line
        })
        .collect();

    Panel::new(lines)
}

/// Asks above a spread row above bids, every row spanning `width`.
///
/// `visible.asks` must already be descending so the best ask is the last
/// row before the spread. `spread` comes from the full book, not just the
/// visible levels; `None` renders a blank spread row.
pub fn stacked(
    visible: &VisibleBook<'_>,
    spread: Option<f64>,
    width: usize,
    alignment: Alignment,
    precision: Precision,
    max_volume: f64,
) -> Panel {
    let mut lines = side_rows(
        visible.asks,
        RowSpec::stacked(Side::Ask, alignment),
        precision,
        width,
        max_volume,
    );
    lines.push(spread_line(spread, width, alignment, precision.price));
    lines.extend(side_rows(
        visible.bids,
        RowSpec::stacked(Side::Bid, alignment),
        precision,
        width,
        max_volume,
    ));
    Panel::new(lines)
}

/// `"Spread: <value>"` pushed away from the bar: right-aligned for left
/// bars, left-aligned for right bars.
fn spread_line(spread: Option<f64>, width: usize, alignment: Alignment, precision: usize) -> PanelLine {
    let Some(spread) = spread else {
        return PanelLine::blank(width);
    };

    let text: String = format!("Spread: {}", fixed(spread, precision))
        .chars()
        .take(width)
        .collect();
    let gap = Segment::blank(width - text.chars().count());
    let label = Segment::styled(text, StyleRole::OffBar);

    match alignment {
        Alignment::BarLeft => PanelLine::new(vec![gap, label]),
        Alignment::BarRight => PanelLine::new(vec![label, gap]),
    }
}

fn side_rows(
    levels: &[Level],
    spec: RowSpec,
    precision: Precision,
    width: usize,
    max_volume: f64,
) -> Vec<PanelLine> {
    levels
        .iter()
        .map(|level| compose_row(level, spec, precision, width, max_volume).into_line())
        .collect()
}

/// Center `panel` in `viewport`, clipping anything that does not fit.
///
/// The panel is treated as a left-aligned block: every line is padded to
/// the widest line before the block is centered. Odd gaps put the extra
/// cell on the right (or bottom).
pub fn place(panel: Panel, viewport: Viewport) -> Panel {
    let width = usize::from(viewport.width);
    let block_width = panel.width().min(width);
    let left = (width - block_width) / 2;

    let mut lines: Vec<PanelLine> = panel
        .lines
        .into_iter()
        .map(|mut line| {
            line.clip(width - left);
            let right = width - left - line.width();
            let mut placed = PanelLine::default();
            if left > 0 {
                placed.push(Segment::blank(left));
            }
            placed.extend(line);
            if right > 0 {
                placed.push(Segment::blank(right));
            }
            placed
        })
        .collect();

    if viewport.height == 0 {
        return Panel::new(lines);
    }

    let height = usize::from(viewport.height);
    lines.truncate(height);
    let gap = height - lines.len();
    let top = gap / 2;
    let bottom = gap - top;

    let mut placed = Vec::with_capacity(height);
    placed.extend((0..top).map(|_| PanelLine::blank(width)));
    placed.extend(lines);
    placed.extend((0..bottom).map(|_| PanelLine::blank(width)));
    Panel::new(placed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Precision = Precision { price: 2, volume: 2 };

    fn levels(pairs: &[(f64, f64)]) -> Vec<Level> {
        pairs.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn side_by_side_fills_the_shorter_column() {
        let bids = levels(&[(99.0, 2.0), (98.0, 4.0)]);
        let asks = levels(&[(100.0, 4.0)]);
        let visible = VisibleBook { bids: &bids, asks: &asks };

        let panel = side_by_side(&visible, 25, 1, P, 4.0);
        assert_eq!(
            panel.plain_lines(),
            vec!["99.00   2.00 4.00  100.00", "98.00   4.00             "]
        );
        assert!(panel.lines.iter().all(|l| l.width() == 25));
    }

    #[test]
    fn side_by_side_spacing_wider_than_viewport() {
        let bids = levels(&[(1.0, 1.0)]);
        let visible = VisibleBook { bids: &bids, asks: &[] };
        let panel = place(side_by_side(&visible, 4, 10, P, 1.0), Viewport::new(4, 1));
        assert_eq!(panel.plain_lines(), vec!["    "]);
    }

    #[test]
    fn spread_row_moves_away_from_the_bar() {
        let left = spread_line(Some(1.5), 16, Alignment::BarLeft, 2);
        assert_eq!(left.plain(), "    Spread: 1.50");
        assert_eq!(left.segments[1].role, Some(StyleRole::OffBar));
        assert_eq!(left.segments[0].role, None);

        let right = spread_line(Some(1.5), 16, Alignment::BarRight, 2);
        assert_eq!(right.plain(), "Spread: 1.50    ");
        assert_eq!(right.segments[0].role, Some(StyleRole::OffBar));
    }

    #[test]
    fn spread_row_is_blank_without_a_spread() {
        let line = spread_line(None, 10, Alignment::BarLeft, 2);
        assert_eq!(line.plain(), " ".repeat(10));
        assert!(line.segments.iter().all(|s| s.role.is_none()));
    }

    #[test]
    fn spread_row_is_clipped_to_width() {
        let line = spread_line(Some(12.25), 6, Alignment::BarRight, 2);
        assert_eq!(line.plain(), "Spread");
    }

    #[test]
    fn stacked_puts_asks_above_the_spread() {
        let asks = levels(&[(101.0, 1.0), (100.0, 2.0)]);
        let bids = levels(&[(99.0, 2.0)]);
        let visible = VisibleBook { bids: &bids, asks: &asks };

        let panel = stacked(&visible, Some(1.0), 14, Alignment::BarRight, P, 2.0);
        assert_eq!(
            panel.plain_lines(),
            vec!["101.00    1.00", "100.00    2.00", "Spread: 1.00  ", "99.00     2.00"]
        );
    }

    #[test]
    fn place_centers_with_extra_cell_on_the_right_and_bottom() {
        let panel = Panel::new(vec![PanelLine::new(vec![Segment::plain("ab")])]);
        let placed = place(panel, Viewport::new(5, 4));
        assert_eq!(placed.plain_lines(), vec!["     ", " ab  ", "     ", "     "]);
    }

    #[test]
    fn place_pads_lines_to_the_block_width() {
        let panel = Panel::new(vec![
            PanelLine::new(vec![Segment::plain("abcd")]),
            PanelLine::new(vec![Segment::plain("x")]),
        ]);
        let placed = place(panel, Viewport::new(8, 0));
        assert_eq!(placed.plain_lines(), vec!["  abcd  ", "  x     "]);
    }

    #[test]
    fn place_clips_oversized_panels() {
        let panel = Panel::new(vec![
            PanelLine::new(vec![Segment::plain("abcdef")]),
            PanelLine::new(vec![Segment::plain("ghijkl")]),
            PanelLine::new(vec![Segment::plain("mnopqr")]),
        ]);
        let placed = place(panel, Viewport::new(4, 2));
        assert_eq!(placed.plain_lines(), vec!["abcd", "ghij"]);
    }

    #[test]
    fn empty_panel_becomes_blank_viewport() {
        let placed = place(Panel::default(), Viewport::new(3, 2));
        assert_eq!(placed.plain_lines(), vec!["   ", "   "]);
    }
}
