// crates/clob-viewer/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::components::{book_panel::draw_book_panel, status_bar::draw_status_bar};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Panels
            Constraint::Length(1), // Status bar
        ])
        .split(f.size());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_book_panel(f, panels[0], "Snapshot", &app.snapshot, &app.palette, app.loading);
    draw_book_panel(f, panels[1], "Stacked", &app.stacked, &app.palette, app.loading);

    draw_status_bar(f, chunks[1], app);
}
