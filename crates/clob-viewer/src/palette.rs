// crates/clob-viewer/src/palette.rs

//! Maps engine style roles onto ratatui styles.

use std::str::FromStr;

use clob_core::{Panel, StyleRole};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::config::{ConfigError, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub off_bar: Style,
    pub on_bid: Style,
    pub on_ask: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            off_bar: Style::default().fg(Color::Indexed(188)),
            on_bid: Style::default().fg(Color::Indexed(228)).bg(Color::Indexed(28)),
            on_ask: Style::default().fg(Color::Indexed(228)).bg(Color::Indexed(197)),
        }
    }
}

impl Palette {
    pub fn from_theme(theme: &Theme) -> Result<Self, ConfigError> {
        let off_bar_fg = parse_color("off_bar_fg", &theme.off_bar_fg)?;
        let bar_fg = parse_color("bar_fg", &theme.bar_fg)?;
        let bid_bg = parse_color("bid_bg", &theme.bid_bg)?;
        let ask_bg = parse_color("ask_bg", &theme.ask_bg)?;

        Ok(Self {
            off_bar: Style::default().fg(off_bar_fg),
            on_bid: Style::default().fg(bar_fg).bg(bid_bg),
            on_ask: Style::default().fg(bar_fg).bg(ask_bg),
        })
    }

    /// Style for a segment role; layout filler stays unstyled.
    pub fn style(&self, role: Option<StyleRole>) -> Style {
        match role {
            Some(StyleRole::OffBar) => self.off_bar,
            Some(StyleRole::OnBid) => self.on_bid,
            Some(StyleRole::OnAsk) => self.on_ask,
            None => Style::default(),
        }
    }

    /// Convert a rendered panel into ratatui lines.
    pub fn paint(&self, panel: &Panel) -> Vec<Line<'static>> {
        panel
            .lines
            .iter()
            .map(|line| {
                Line::from(
                    line.segments
                        .iter()
                        .filter(|s| !s.text.is_empty())
                        .map(|s| Span::styled(s.text.clone(), self.style(s.role)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value.trim()).map_err(|_| ConfigError::Color {
        field,
        value: value.to_string(),
    })
}
