use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use metroroute_core::prelude::NetworkConfig;
use serde::Deserialize;

use crate::error::ServerError;

/// Server settings read from a TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub feed_dirs: Vec<PathBuf>,
    pub request_timeout_secs: u64,
    pub concurrency_limit: usize,
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            feed_dirs: Vec::new(),
            request_timeout_secs: 10,
            concurrency_limit: 256,
            log_filter: "info,tower_http=debug".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: &Path) -> Result<Self, ServerError> {
        let text = std::fs::read_to_string(path).map_err(|source| ServerError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&text)?;

        // Feed directories are relative to the config file
        if let Some(base) = path.parent() {
            config.feed_dirs = config
                .feed_dirs
                .into_iter()
                .map(|dir| if dir.is_relative() { base.join(dir) } else { dir })
                .collect();
        }
        Ok(config)
    }

    pub fn network_config(&self) -> NetworkConfig {
        NetworkConfig::new(self.feed_dirs.clone())
    }
}
