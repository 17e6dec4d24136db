//! clob-core
//!
//! Pure order-book ladder rendering:
//! - price levels and book snapshots
//! - display ordering and depth truncation
//! - volume bar scaling
//! - row and panel composition (side-by-side and stacked)
//! - the `Clob` engine tying configuration, book and viewport together

pub mod level;
pub mod side;
pub mod orientation;
pub mod panel;
pub mod ordering;
pub mod depth;
pub mod scaling;
pub mod row;
pub mod layout;
pub mod clob;

pub use level::{Book, Level};
pub use side::Side;
pub use orientation::{Alignment, Orientation};

pub use panel::{Panel, PanelLine, Segment, StyleRole};

pub use ordering::{sort_book, SortedBook};
pub use depth::{DepthLimit, VisibleBook};
pub use scaling::{bar_len, max_volume};
pub use row::{compose_row, Precision, Row, RowSpec};
pub use layout::Viewport;
pub use clob::{Clob, PLACEHOLDER};
