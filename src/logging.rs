use std::{
    fs::{File, OpenOptions},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Installs the global subscriber.
///
/// The dashboard owns the terminal, so interactive sessions only log when a
/// file is given. One-shot runs log to stderr. A subscriber installed earlier
/// (e.g. by a test harness) is left in place.
pub fn init(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    match (log_file, interactive) {
        (Some(path), _) => {
            let file = open_log_file(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        (None, false) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init();
        }
        (None, true) => {}
    }
    tracing::debug!(interactive, "logging initialized");
    Ok(())
}
