//! Logging setup.
//!
//! The terminal is owned by the game while it runs, so logs never go to stdout
//! or stderr. They are written to a file when one is configured and dropped
//! otherwise.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. Returns whether logging is enabled.
pub fn init(log_file: Option<&Path>) -> Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = open_log_file(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))?;

    Ok(true)
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_no_logging() {
        assert!(!init(None).unwrap());
    }

    #[test]
    fn events_reach_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.log");

        assert!(init(Some(&path)).unwrap());
        tracing::info!(moves = 3, "log file smoke test");

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("log file smoke test"));
        assert!(written.contains("moves=3"));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_log_file(dir.path()).unwrap_err();
        assert!(err.to_string().contains("open log file"));
    }
}
