// crates/clob-viewer/src/components/book_panel.rs

use clob_core::{Clob, Viewport};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

use crate::palette::Palette;

/// Shown over a panel while a refresh is in flight.
pub const LOADING: &str = "Loading...";

/// Draw one ladder inside a rounded, padded border. The ladder is rendered
/// for the inner area, so the engine sees exactly the space it fills.
pub fn draw_book_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    clob: &Clob,
    palette: &Palette,
    loading: bool,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .padding(Padding::new(2, 2, 1, 1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if loading {
        let loading = Paragraph::new(LOADING)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(loading, inner);
        return;
    }

    let panel = clob.view_with(Viewport::new(inner.width, inner.height));
    f.render_widget(Paragraph::new(palette.paint(&panel)), inner);
}
