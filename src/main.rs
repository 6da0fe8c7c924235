//! Address book assistant - main entry point
//!
//! Runs the interactive contact assistant on stdin/stdout, persisting the
//! address book to a JSON snapshot between sessions.

use address_book::assistant;
use address_book::{Config, FileSnapshotStore};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout stays the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        path = %config.book_path.display(),
        window_days = config.birthday_window_days,
        "Starting address book assistant"
    );

    let store = FileSnapshotStore::new(&config.book_path);
    let stdin = io::stdin();

    if let Err(e) =
        assistant::run_interactive(&store, config.birthday_window_days, stdin.lock(), io::stdout())
    {
        error!("Assistant session failed: {}", e);
        return Err(e);
    }

    info!("Address book assistant shutdown complete");
    Ok(())
}
