//! CSV feed records and readers

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::Minutes;

pub const STATIONS_FILE: &str = "stations.csv";
pub const CONNECTIONS_FILE: &str = "connections.csv";

#[derive(Debug, Clone, Deserialize)]
pub struct FeedStation {
    pub station_id: String,
    pub name: String,
    pub line: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConnection {
    pub from_station_id: String,
    pub to_station_id: String,
    pub minutes: Minutes,
}

/// Reads every well-formed record of a CSV file.
///
/// Rows that fail to deserialize are skipped; the number skipped is
/// returned next to the records.
pub fn deserialize_feed_file<T>(path: &Path) -> Result<(Vec<T>, usize), crate::Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
    let mut records = Vec::new();
    let mut skipped = 0;
    for row in reader.deserialize() {
        match row {
            Ok(record) => records.push(record),
            Err(e) => {
                log::trace!("Skipping malformed row in {}: {e}", path.display());
                skipped += 1;
            }
        }
    }
    Ok((records, skipped))
}
