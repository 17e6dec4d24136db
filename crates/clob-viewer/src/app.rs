// crates/clob-viewer/src/app.rs

use chrono::{DateTime, Local};
use clob_core::{Book, Clob, Level, Orientation};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::config::ViewerConfig;
use crate::feed::{FeedRequest, FeedUpdate};
use crate::palette::Palette;

pub struct App {
    /// Left panel: the snapshot book, orientation toggled with `v`.
    pub snapshot: Clob,
    /// Right panel: always stacked, alignment toggled with `a`.
    pub stacked: Clob,

    pub palette: Palette,

    // UI state
    pub should_quit: bool,
    pub loading: bool,

    // Feed state
    pub source: Option<String>,
    pub last_update: Option<DateTime<Local>>,
    pub last_error: Option<String>,

    pub feed_tx: Option<UnboundedSender<FeedRequest>>,
}

impl App {
    pub fn new(config: &ViewerConfig, palette: Palette, book: Book, source: Option<String>) -> Self {
        let mut snapshot = engine(config, book.clone());
        snapshot.orientation = config.orientation.into();

        let mut stacked = engine(config, book);
        stacked.orientation = Orientation::Stacked;

        Self {
            snapshot,
            stacked,
            palette,
            should_quit: false,
            loading: false,
            last_update: source.as_ref().map(|_| Local::now()),
            source,
            last_error: None,
            feed_tx: None,
        }
    }

    pub fn set_feed_sender(&mut self, tx: UnboundedSender<FeedRequest>) {
        self.feed_tx = Some(tx);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.request_refresh();
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.toggle_orientation();
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.toggle_alignment();
            }
            _ => {}
        }
    }

    pub fn toggle_orientation(&mut self) {
        self.snapshot.orientation = self.snapshot.orientation.toggled();
    }

    pub fn toggle_alignment(&mut self) {
        self.stacked.alignment = self.stacked.alignment.toggled();
    }

    /// Ask the feed for a fresh snapshot. Without a feed (demo book) there
    /// is nothing to reload.
    pub fn request_refresh(&mut self) {
        let Some(tx) = &self.feed_tx else {
            debug!("refresh ignored: no snapshot source");
            return;
        };
        if tx.send(FeedRequest::Reload).is_ok() {
            self.loading = true;
        } else {
            warn!("snapshot feed is gone");
            self.last_error = Some("snapshot feed stopped".to_string());
        }
    }

    pub fn handle_feed_update(&mut self, update: FeedUpdate) {
        self.loading = false;
        match update {
            FeedUpdate::Loaded { book, at } => {
                self.snapshot.set_book(book.clone());
                self.stacked.set_book(book);
                self.last_update = Some(at);
                self.last_error = None;
            }
            FeedUpdate::Failed(reason) => {
                self.last_error = Some(reason);
            }
        }
    }
}

fn engine(config: &ViewerConfig, book: Book) -> Clob {
    let mut clob = Clob::new();
    clob.book = book;
    clob.alignment = config.alignment.into();
    clob.spacing = config.spacing;
    clob.price_precision = config.price_precision;
    clob.volume_precision = config.volume_precision;
    clob
}

/// Book shown when no snapshot file is given.
pub fn demo_book() -> Book {
    Book::new(
        vec![Level::new(99.0, 1.0), Level::new(98.0, 20.0), Level::new(97.0, 40.0)],
        vec![Level::new(100.0, 5.0), Level::new(101.0, 10.0), Level::new(102.0, 20.0)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clob_core::Alignment;
    use tokio::sync::mpsc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn demo_app() -> App {
        App::new(&ViewerConfig::default(), Palette::default(), demo_book(), None)
    }

    #[test]
    fn panels_start_from_config() {
        let app = demo_app();
        assert_eq!(app.snapshot.orientation, Orientation::SideBySide);
        assert_eq!(app.stacked.orientation, Orientation::Stacked);
        assert_eq!(app.snapshot.volume_precision, 8);
        assert_eq!(app.stacked.book, demo_book());
        assert!(app.last_update.is_none());
    }

    #[test]
    fn v_toggles_snapshot_orientation_only() {
        let mut app = demo_app();
        app.handle_key(press(KeyCode::Char('v')));
        assert_eq!(app.snapshot.orientation, Orientation::Stacked);
        assert_eq!(app.stacked.orientation, Orientation::Stacked);
        app.handle_key(press(KeyCode::Char('v')));
        assert_eq!(app.snapshot.orientation, Orientation::SideBySide);
    }

    #[test]
    fn a_toggles_stacked_alignment_only() {
        let mut app = demo_app();
        app.handle_key(press(KeyCode::Char('a')));
        assert_eq!(app.stacked.alignment, Alignment::BarRight);
        assert_eq!(app.snapshot.alignment, Alignment::BarLeft);
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut app = demo_app();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = demo_app();
        app.handle_key(press(KeyCode::Char('c')));
        assert!(!app.should_quit);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn refresh_without_feed_is_a_no_op() {
        let mut app = demo_app();
        app.handle_key(press(KeyCode::Char('r')));
        assert!(!app.loading);
    }

    #[test]
    fn refresh_sends_a_reload_request() {
        let mut app = demo_app();
        let (tx, mut rx) = mpsc::unbounded_channel();
        app.set_feed_sender(tx);

        app.handle_key(press(KeyCode::Char('r')));
        assert!(app.loading);
        assert_eq!(rx.try_recv().unwrap(), FeedRequest::Reload);
    }

    #[test]
    fn refresh_with_closed_feed_reports_an_error() {
        let mut app = demo_app();
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        app.set_feed_sender(tx);

        app.request_refresh();
        assert!(!app.loading);
        assert!(app.last_error.is_some());
    }

    #[test]
    fn loaded_update_replaces_both_books() {
        let mut app = demo_app();
        app.loading = true;
        let book = Book::new(vec![Level::new(1.0, 1.0)], vec![]);
        let at = Local::now();

        app.handle_feed_update(FeedUpdate::Loaded { book: book.clone(), at });
        assert!(!app.loading);
        assert_eq!(app.snapshot.book, book);
        assert_eq!(app.stacked.book, book);
        assert_eq!(app.last_update, Some(at));
    }

    #[test]
    fn failed_update_keeps_the_previous_book() {
        let mut app = demo_app();
        app.loading = true;
        app.handle_feed_update(FeedUpdate::Failed("line 3: bad".to_string()));
        assert!(!app.loading);
        assert_eq!(app.snapshot.book, demo_book());
        assert_eq!(app.last_error.as_deref(), Some("line 3: bad"));
    }
}
