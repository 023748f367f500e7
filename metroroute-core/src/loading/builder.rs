use std::path::Path;

use log::{info, warn};

use super::config::NetworkConfig;
use super::feed::{
    CONNECTIONS_FILE, FeedConnection, FeedStation, STATIONS_FILE, deserialize_feed_file,
};
use crate::Error;
use crate::model::MetroNetwork;

/// Creates a metro network from the feeds listed in the configuration
///
/// All stations of all feeds are added before any connection, so a
/// connection may join stations from different feeds.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a feed file cannot be
/// read, or a connection references a station no feed defines.
pub fn create_metro_network(config: &NetworkConfig) -> Result<MetroNetwork, Error> {
    validate_config(config)?;

    let mut feeds = Vec::with_capacity(config.feed_dirs.len());
    for dir in &config.feed_dirs {
        info!("Reading metro feed: {}", dir.display());
        feeds.push(read_feed(dir)?);
    }

    let mut network = MetroNetwork::new();
    for (stations, _) in &feeds {
        for station in stations {
            network.add_station(&station.station_id, &station.name, &station.line);
        }
    }

    for (_, connections) in &feeds {
        for connection in connections {
            network.add_connection(
                &connection.from_station_id,
                &connection.to_station_id,
                connection.minutes,
            )?;
        }
    }

    info!("Metro network created: {}", network.network_info());
    Ok(network)
}

fn read_feed(dir: &Path) -> Result<(Vec<FeedStation>, Vec<FeedConnection>), Error> {
    let stations_path = dir.join(STATIONS_FILE);
    let (stations, skipped): (Vec<FeedStation>, _) = deserialize_feed_file(&stations_path)?;
    if skipped > 0 {
        warn!(
            "Skipped {skipped} malformed rows in {}",
            stations_path.display()
        );
    }

    let connections_path = dir.join(CONNECTIONS_FILE);
    let (connections, skipped): (Vec<FeedConnection>, _) =
        deserialize_feed_file(&connections_path)?;
    if skipped > 0 {
        warn!(
            "Skipped {skipped} malformed rows in {}",
            connections_path.display()
        );
    }

    info!(
        "Loaded {} stations and {} connections from {}",
        stations.len(),
        connections.len(),
        dir.display()
    );
    Ok((stations, connections))
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    if config.feed_dirs.is_empty() {
        return Err(Error::InvalidData(
            "No feed directories provided in the configuration".to_string(),
        ));
    }

    for dir in &config.feed_dirs {
        if !dir.is_dir() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Feed directory not found: {}", dir.display()),
            )));
        }
    }

    Ok(())
}
