//! # Tool Configuration
//!
//! `openfire-tool` reads an optional `openfire.toml`. Every section has
//! defaults, so an empty file (or no file) is a valid configuration.
//!
//! ## Example: TOML Configuration
//!
//! ```toml
//! [tool]
//! board = "rpipico"
//! log_level = "debug"
//!
//! [export]
//! format = "toml"
//! pretty = false
//!
//! [[custom_preset]]
//! board = "waveshareZero"
//! label = "Two button"
//! pins = [0, 1, -1, -1, -1, -1, -1, -1, -1, -1,
//!         -1, -1, -1, -1, 23, 24, -2, -1, -1, -1,
//!         -1, -1, -1, -1, -1, -1, -1, -1, -1, 30]
//! ```
//!
//! - `tool.board` is the board token used when a command does not name one.
//! - `custom_preset.pins` holds pin function indices, one per GPIO. They are
//!   validated by `openfire-tool check`, not at load time.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tool: ToolConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default, rename = "custom_preset")]
    pub custom_presets: Vec<CustomPresetConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolConfig {
    #[serde(default = "default_board")]
    pub board: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            board: default_board(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub format: ExportFormat,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            pretty: default_pretty(),
        }
    }
}

/// A user-authored pin mapping, as raw pin function indices.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomPresetConfig {
    pub board: String,
    pub label: String,
    pub pins: Vec<i32>,
}

fn default_board() -> String {
    "generic".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Config {
    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.tool
            .log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.tool.log_level.clone()))
    }
}

/// Level to install the subscriber at. Runs before logging is up, so a bad
/// `log_level` is handed back for the caller to report once it is.
pub fn startup_log_level(
    verbose: bool,
    config: Option<&Config>,
) -> (tracing::Level, Option<ConfigError>) {
    let parsed = config.map(Config::log_level).transpose();
    match (verbose, parsed) {
        (true, Ok(_)) => (tracing::Level::DEBUG, None),
        (true, Err(e)) => (tracing::Level::DEBUG, Some(e)),
        (false, Ok(level)) => (level.unwrap_or(tracing::Level::INFO), None),
        (false, Err(e)) => (tracing::Level::INFO, Some(e)),
    }
}

/// Reads and parses a config file. Does not log: the tool loads its config
/// before the subscriber is installed.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.tool.board, "generic");
        assert_eq!(config.tool.log_level, "info");
        assert_eq!(config.export.format, ExportFormat::Json);
        assert!(config.export.pretty);
        assert!(config.custom_presets.is_empty());
    }

    #[test]
    fn test_load_config_success() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("openfire.toml");
        let mut file = File::create(&file_path).unwrap();
        writeln!(
            file,
            "[tool]\nboard = 'rpipico'\n\n[[custom_preset]]\nboard = 'generic'\nlabel = 'x'\npins = [0, -1]"
        )
        .unwrap();
        file.flush().unwrap();
        let config = load_config(&file_path).unwrap();
        assert_eq!(config.tool.board, "rpipico");
        // Defaults for missing fields
        assert_eq!(config.tool.log_level, "info");
        assert_eq!(config.export.format, ExportFormat::Json);
        assert_eq!(config.custom_presets.len(), 1);
        assert_eq!(config.custom_presets[0].pins, vec![0, -1]);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent_file.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bad.toml");
        std::fs::write(&file_path, "[export]\nformat = 'yaml'").unwrap();
        assert!(matches!(load_config(&file_path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_log_level_parse() {
        let mut config = Config::default();
        config.tool.log_level = "debug".to_string();
        assert_eq!(config.log_level().unwrap(), tracing::Level::DEBUG);
        config.tool.log_level = "chatty".to_string();
        assert!(matches!(config.log_level(), Err(ConfigError::LogLevel(ref s)) if s == "chatty"));
    }

    #[test]
    fn test_startup_log_level_keeps_bad_level_for_later() {
        let mut config = Config::default();
        config.tool.log_level = "chatty".to_string();
        let (level, problem) = startup_log_level(false, Some(&config));
        assert_eq!(level, tracing::Level::INFO);
        assert!(matches!(problem, Some(ConfigError::LogLevel(_))));

        let (level, problem) = startup_log_level(true, Some(&config));
        assert_eq!(level, tracing::Level::DEBUG);
        assert!(problem.is_some());

        config.tool.log_level = "warn".to_string();
        let (level, problem) = startup_log_level(false, Some(&config));
        assert_eq!(level, tracing::Level::WARN);
        assert!(problem.is_none());
        assert_eq!(startup_log_level(false, None).0, tracing::Level::INFO);
    }
}
