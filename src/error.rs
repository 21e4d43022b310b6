use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("board '{board}' has no alternate preset named '{label}'")]
    UnknownAlternate { board: String, label: String },
    #[error("'{0}' is not a byte value (use 0-255 or 0x00-0xFF)")]
    InvalidByte(String),
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML export failed: {0}")]
    TomlExport(#[from] toml::ser::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
