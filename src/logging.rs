use anyhow::{anyhow, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter directives, e.g. `WIKIBROWSE_LOG=debug`.
pub const LOG_ENV: &str = "WIKIBROWSE_LOG";

pub fn default_log_path() -> Option<PathBuf> {
    crate::config::config_dir().map(|dir| dir.join("wikibrowse.log"))
}

// The TUI owns stdout, so everything goes to a file.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
