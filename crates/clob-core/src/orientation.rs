//! Layout orientation and bar alignment.

/// How the two sides of the book are arranged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Bids and asks in two columns, best levels on the top row.
    #[default]
    SideBySide,
    /// Asks above bids with a spread row in between. The best ask sits at
    /// the bottom of the ask block, the best bid at the top of the bid block.
    Stacked,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::SideBySide => Orientation::Stacked,
            Orientation::Stacked => Orientation::SideBySide,
        }
    }
}

/// Which edge of a row the volume bar grows from.
///
/// The configured alignment only affects stacked layouts; side-by-side
/// layouts always grow bid bars from the right and ask bars from the left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Bar on the left, volume first, price on the right.
    #[default]
    BarLeft,
    /// Bar on the right, price first, volume on the right.
    BarRight,
}

impl Alignment {
    pub fn toggled(self) -> Self {
        match self {
            Alignment::BarLeft => Alignment::BarRight,
            Alignment::BarRight => Alignment::BarLeft,
        }
    }
}
