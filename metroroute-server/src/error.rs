use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
    #[error("Failed to load metro network: {0}")]
    Network(#[from] metroroute_core::Error),
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
