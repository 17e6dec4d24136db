// crates/clob-viewer/src/main.rs

mod app;
mod components;
mod config;
mod feed;
mod palette;
mod ui;

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use clob_snapshot::load_snapshot;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app::{demo_book, App};
use crate::config::ViewerConfig;
use crate::feed::{FeedRequest, FeedUpdate, SnapshotFeed};
use crate::palette::Palette;

const DEFAULT_LOG_FILE: &str = "clob-viewer.log";

#[derive(Parser)]
#[clap(name = "clob-viewer")]
#[clap(about = "Terminal order-book ladder for depth snapshots")]
struct Cli {
    /// Depth snapshot to display (.json depth payload or CSV levels)
    #[clap(short, long)]
    snapshot: Option<PathBuf>,

    /// TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Reload the snapshot every N seconds
    #[clap(short, long)]
    refresh_secs: Option<u64>,

    /// Write logs to this file
    #[clap(short, long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; the terminal belongs to the UI, so logs go to a file.
    if cli.debug || cli.log_file.is_some() {
        let path = cli
            .log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
        init_logging(&path, cli.debug)?;
    }

    let config = ViewerConfig::load(cli.config.as_deref())
        .with_context(|| format!("loading config {:?}", cli.config))?;
    let palette = Palette::from_theme(&config.theme).context("invalid theme")?;

    let book = match &cli.snapshot {
        Some(path) => load_snapshot(path).with_context(|| format!("loading snapshot {}", path.display()))?,
        None => demo_book(),
    };
    info!(
        bids = book.bids.len(),
        asks = book.asks.len(),
        "initial book loaded"
    );

    let source = cli.snapshot.as_ref().map(|p| p.display().to_string());
    let app = App::new(&config, palette, book, source);

    let refresh = cli
        .refresh_secs
        .or(config.refresh_secs)
        .filter(|&secs| secs > 0)
        .map(Duration::from_secs);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, cli.snapshot, refresh).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("viewer stopped: {err:#}");
    }
    res
}

fn init_logging(path: &Path, debug: bool) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    snapshot: Option<PathBuf>,
    refresh: Option<Duration>,
) -> Result<()> {
    let (tx_to_feed, rx_from_app) = mpsc::unbounded_channel::<FeedRequest>();
    let (tx_to_app, mut rx_from_feed) = mpsc::unbounded_channel::<FeedUpdate>();

    // Only a snapshot file can be reloaded; the demo book has no feed.
    let feed_handle = snapshot.map(|path| {
        app.set_feed_sender(tx_to_feed);
        let feed = SnapshotFeed::new(path, refresh, tx_to_app);
        tokio::spawn(feed.run(rx_from_app))
    });

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        while let Ok(update) = rx_from_feed.try_recv() {
            app.handle_feed_update(update);
        }

        if app.should_quit {
            break;
        }
    }

    if let Some(handle) = feed_handle {
        handle.abort();
    }
    Ok(())
}
