//! Side (Bid / Ask) of a price level.

use crate::panel::StyleRole;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    /// Style role painted over this side's volume bar.
    pub fn bar_role(self) -> StyleRole {
        match self {
            Side::Bid => StyleRole::OnBid,
            Side::Ask => StyleRole::OnAsk,
        }
    }
}
