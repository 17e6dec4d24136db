// crates/clob-viewer/src/components/status_bar.rs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

const HINTS: [(&str, &str); 4] = [
    ("r", "refresh"),
    ("v", "toggle orientation"),
    ("a", "toggle alignment"),
    ("q", "quit"),
];

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(Paragraph::new(status_line(app)), area);
}

fn status_line(app: &App) -> Line<'static> {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    for (i, (k, action)) in HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*k, key));
        spans.push(Span::raw(format!(": {action}")));
    }
    spans.push(Span::raw(" | "));

    if let Some(error) = &app.last_error {
        spans.push(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(at) = app.last_update {
        spans.push(Span::styled(
            format!("Updated {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        ));
    } else {
        spans.push(Span::styled("Demo book", Style::default().fg(Color::Gray)));
    }

    if let Some(source) = &app.source {
        spans.push(Span::raw(format!(" ({source})")));
    }

    Line::from(spans)
}
