//! File-based logging
//!
//! The terminal is owned by the TUI, so `tracing` output goes to
//! `car-list-tui.log` inside the config directory.

use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

const LOG_FILE_NAME: &str = "car-list-tui.log";

/// Parse a level name, defaulting to `info` for anything unrecognised
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or(Level::INFO)
}

/// Install the global subscriber writing to the default log location
///
/// Returns the log file path, or `None` when there is no home directory.
pub fn init(config: &Config) -> Result<Option<PathBuf>> {
    let Some(dir) = Config::config_dir() else {
        return Ok(None);
    };
    init_in(&dir, config).map(Some)
}

/// Install the global subscriber writing to `dir/car-list-tui.log`
pub fn init_in(dir: &Path, config: &Config) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(parse_level(&config.log_level))
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("loud"), Level::INFO);
    }

    #[test]
    fn test_init_in_reports_unusable_directory() {
        // A regular file where the log directory should be
        let blocker = std::env::temp_dir().join(format!("car-list-tui-log-{}", std::process::id()));
        fs::write(&blocker, "").unwrap();

        let result = init_in(&blocker, &Config::default());
        fs::remove_file(&blocker).unwrap();

        let message = format!("{:#}", result.unwrap_err());
        assert!(
            message.starts_with("Failed to create log directory"),
            "unexpected error: {}",
            message
        );
    }
}
