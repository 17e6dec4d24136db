// crates/clob-viewer/src/feed.rs

//! Background snapshot reloading.
//!
//! The feed task owns the snapshot path. It re-reads the file when the UI
//! asks for a refresh and, optionally, on a fixed interval, then hands the
//! complete book back to the UI loop. Books are never shared between the
//! two sides of the channel.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use clob_core::Book;
use clob_snapshot::{parse_snapshot, Format, SnapshotError};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Requests from the UI to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedRequest {
    Reload,
}

/// Results from the feed to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedUpdate {
    Loaded { book: Book, at: DateTime<Local> },
    Failed(String),
}

pub struct SnapshotFeed {
    path: PathBuf,
    refresh: Option<Duration>,
    tx: UnboundedSender<FeedUpdate>,
}

impl SnapshotFeed {
    pub fn new(path: PathBuf, refresh: Option<Duration>, tx: UnboundedSender<FeedUpdate>) -> Self {
        Self { path, refresh, tx }
    }

    /// Serve reload requests until the UI drops its sender.
    pub async fn run(self, mut rx: UnboundedReceiver<FeedRequest>) {
        let mut ticker = self.refresh.map(|period| {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker
        });

        loop {
            tokio::select! {
                _ = next_tick(&mut ticker) => {
                    debug!("periodic snapshot refresh");
                    self.reload().await;
                }

                request = rx.recv() => match request {
                    Some(FeedRequest::Reload) => self.reload().await,
                    None => break,
                },
            }
        }

        info!("snapshot feed stopped");
    }

    async fn reload(&self) {
        let update = match self.load().await {
            Ok(book) => {
                info!(
                    path = %self.path.display(),
                    bids = book.bids.len(),
                    asks = book.asks.len(),
                    "snapshot reloaded"
                );
                FeedUpdate::Loaded { book, at: Local::now() }
            }
            Err(e) => {
                warn!(path = %self.path.display(), "snapshot reload failed: {}", e);
                FeedUpdate::Failed(e.to_string())
            }
        };

        if self.tx.send(update).is_err() {
            debug!("UI gone, dropping snapshot update");
        }
    }

    async fn load(&self) -> Result<Book, SnapshotError> {
        let input = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SnapshotError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_snapshot(&input, Format::from_path(&self.path))
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}
