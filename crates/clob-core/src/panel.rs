//! Styled text output.
//!
//! A rendered book is a [`Panel`]: a list of lines, each made of
//! [`Segment`]s tagged with an abstract [`StyleRole`]. The engine never
//! picks colors; callers map roles to whatever their backend paints with.

use std::fmt;

/// The three presentation roles a segment can carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StyleRole {
    /// Text outside a volume bar (and the spread row).
    OffBar,
    /// The filled part of a bid row.
    OnBid,
    /// The filled part of an ask row.
    OnAsk,
}

/// A run of text with one role. `role == None` marks unstyled filler
/// added by layout and centering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub role: Option<StyleRole>,
}

impl Segment {
    pub fn styled(text: impl Into<String>, role: StyleRole) -> Self {
        Segment {
            text: text.into(),
            role: Some(role),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Segment {
            text: text.into(),
            role: None,
        }
    }

    /// `width` spaces of unstyled filler.
    pub fn blank(width: usize) -> Self {
        Segment::plain(" ".repeat(width))
    }

    /// Visible width in character cells.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelLine {
    pub segments: Vec<Segment>,
}

impl PanelLine {
    pub fn new(segments: Vec<Segment>) -> Self {
        PanelLine { segments }
    }

    pub fn blank(width: usize) -> Self {
        PanelLine::new(vec![Segment::blank(width)])
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn extend(&mut self, other: PanelLine) {
        self.segments.extend(other.segments);
    }

    pub fn width(&self) -> usize {
        self.segments.iter().map(Segment::width).sum()
    }

    /// The line's text with all styling dropped.
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Cut the line down to at most `width` cells, dropping text from the
    /// right.
    pub fn clip(&mut self, width: usize) {
        let mut remaining = width;
        for segment in &mut self.segments {
            let len = segment.width();
            if len > remaining {
                segment.text = segment.text.chars().take(remaining).collect();
            }
            remaining -= segment.width();
        }
        self.segments.retain(|s| !s.text.is_empty() || s.role.is_some());
    }
}

/// A rendered block of lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Panel {
    pub lines: Vec<PanelLine>,
}

impl Panel {
    pub fn new(lines: Vec<PanelLine>) -> Self {
        Panel { lines }
    }

    /// A single unstyled line, shown instead of a layout.
    pub fn placeholder(text: &str) -> Self {
        Panel::new(vec![PanelLine::new(vec![Segment::plain(text)])])
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest line.
    pub fn width(&self) -> usize {
        self.lines.iter().map(PanelLine::width).max().unwrap_or(0)
    }

    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(PanelLine::plain).collect()
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for segment in &line.segments {
                f.write_str(&segment.text)?;
            }
        }
        Ok(())
    }
}
