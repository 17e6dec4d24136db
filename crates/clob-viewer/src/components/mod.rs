// crates/clob-viewer/src/components/mod.rs

pub mod book_panel;
pub mod status_bar;
