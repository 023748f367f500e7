//! Metro network graph store and methods to work with it

use hashbrown::HashMap;

use super::station::Station;
use crate::routing::{Route, bfs, dijkstra};
use crate::{Error, Minutes, StationIdx};

/// Undirected, weighted metro network.
///
/// Built once through [`MetroNetwork::add_station`] and
/// [`MetroNetwork::add_connection`], then queried read-only.
#[derive(Debug, Clone, Default)]
pub struct MetroNetwork {
    /// All stations, in insertion order
    stations: Vec<Station>,
    /// Connections of each station, parallel to `stations`
    adjacency: Vec<Vec<(StationIdx, Minutes)>>,
    /// Station id to arena index
    index: HashMap<String, StationIdx>,
    /// Member stations of each line, in insertion order
    lines: HashMap<String, Vec<StationIdx>>,
    /// Number of undirected connections
    connection_count: usize,
}

impl MetroNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a station unless one with the same `id` already exists.
    ///
    /// A duplicate id is silently ignored: the first insertion wins, and the
    /// index of the stored station is returned either way.
    pub fn add_station(&mut self, id: &str, name: &str, line: &str) -> StationIdx {
        if let Some(&existing) = self.index.get(id) {
            return existing;
        }

        let idx = self.stations.len();
        self.stations.push(Station::new(id, name, line));
        self.adjacency.push(Vec::new());
        self.index.insert(id.to_string(), idx);
        self.lines.entry(line.to_string()).or_default().push(idx);
        idx
    }

    /// Connects two existing stations in both directions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStation`] if either id has not been added.
    pub fn add_connection(&mut self, from: &str, to: &str, minutes: Minutes) -> Result<(), Error> {
        let a = self.require_station(from)?;
        let b = self.require_station(to)?;

        self.adjacency[a].push((b, minutes));
        self.adjacency[b].push((a, minutes));
        self.connection_count += 1;
        Ok(())
    }

    /// Route with the fewest connections between two stations.
    ///
    /// Returns `None` when either id is unknown or the target is unreachable.
    pub fn find_least_transfers(&self, start_id: &str, target_id: &str) -> Option<Route<'_>> {
        let start = self.station_index(start_id)?;
        let target = self.station_index(target_id)?;
        bfs::least_transfers(self, start, target)
    }

    /// Route with the lowest total travel time between two stations.
    ///
    /// Returns `None` when either id is unknown or the target is unreachable.
    pub fn find_fastest_route(&self, start_id: &str, target_id: &str) -> Option<Route<'_>> {
        let start = self.station_index(start_id)?;
        let target = self.station_index(target_id)?;
        dijkstra::fastest_route(self, start, target)
    }

    fn require_station(&self, id: &str) -> Result<StationIdx, Error> {
        self.station_index(id)
            .ok_or_else(|| Error::UnknownStation(id.to_string()))
    }

    /// Arena index of the station with the given id
    pub fn station_index(&self, id: &str) -> Option<StationIdx> {
        self.index.get(id).copied()
    }

    /// Station at the given arena index
    pub fn station(&self, idx: StationIdx) -> Option<&Station> {
        self.stations.get(idx)
    }

    pub fn station_by_id(&self, id: &str) -> Option<&Station> {
        self.station_index(id).map(|idx| &self.stations[idx])
    }

    /// Connections leaving `idx`, in insertion order.
    /// Empty for an index outside the arena.
    pub fn neighbors(&self, idx: StationIdx) -> &[(StationIdx, Minutes)] {
        self.adjacency
            .get(idx)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Stations of a line in insertion order
    pub fn line_stations<'a>(
        &'a self,
        line: &str,
    ) -> Option<impl Iterator<Item = &'a Station> + use<'a>> {
        self.lines
            .get(line)
            .map(|members| members.iter().map(move |&idx| &self.stations[idx]))
    }

    /// Line names, sorted
    pub fn lines(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.lines.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connection_count
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Short description of the network contents
    pub fn network_info(&self) -> String {
        let lines = self
            .lines()
            .into_iter()
            .map(|line| format!("{line} ({} stations)", self.lines[line].len()))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} stations, {} connections, {} lines: {lines}",
            self.station_count(),
            self.connection_count(),
            self.line_count()
        )
    }
}
