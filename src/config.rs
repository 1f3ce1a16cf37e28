use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User preferences read from `~/.car-list-tui/config.json`
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    /// Maximum level written to the log file (trace, debug, info, warn, error)
    pub log_level: String,
    /// Ask before quitting
    pub confirm_quit: bool,
    /// Capture mouse events so list entries can be clicked
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            log_level: "info".to_string(),
            confirm_quit: true,
            mouse: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".car-list-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config file
    ///
    /// A missing file (or no home directory) yields the defaults; an
    /// unreadable or malformed file is an error.
    pub fn load() -> anyhow::Result<Config> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Malformed config {}", path.display()))
    }

    pub fn parse(contents: &str) -> anyhow::Result<Config> {
        let config = serde_json::from_str(contents)?;
        Ok(config)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::parse(r#"{ "tick_rate_ms": 250, "confirm_quit": false }"#).unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert!(!config.confirm_quit);
        assert_eq!(config.log_level, "info");
        assert!(config.mouse);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(Config::parse("{ tick_rate_ms: }").is_err());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = env::temp_dir().join(format!("car-list-tui-bad-{}.json", std::process::id()));
        fs::write(&path, "not json").unwrap();
        let result = Config::load_from(&path);
        let _ = fs::remove_file(&path);

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.starts_with("Malformed config"));
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = env::temp_dir().join("car-list-tui-missing-config.json");
        let _ = fs::remove_file(&path);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join(format!("car-list-tui-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "log_level": "debug", "mouse": false }"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.log_level, "debug");
        assert!(!config.mouse);
    }
}
