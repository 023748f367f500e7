use std::path::PathBuf;

use serde::Deserialize;

/// Where to load a metro network from.
///
/// Each feed directory holds a `stations.csv` and a `connections.csv`.
/// Feeds are merged in order; a station id seen in an earlier feed wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkConfig {
    pub feed_dirs: Vec<PathBuf>,
}

impl NetworkConfig {
    pub fn new(feed_dirs: Vec<PathBuf>) -> Self {
        Self { feed_dirs }
    }
}
