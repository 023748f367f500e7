//! Route returned by the searches

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::{MetroNetwork, Station};
use crate::{Minutes, StationIdx};

/// Ordered list of stations from start to target, inclusive,
/// together with the summed travel time of the traversed connections.
#[derive(Clone)]
pub struct Route<'a> {
    network: &'a MetroNetwork,
    stops: Vec<StationIdx>,
    travel_time: Minutes,
}

impl<'a> Route<'a> {
    /// Rebuilds a route by following predecessors backward from `target`.
    ///
    /// `predecessor` yields, for every reached station except `start`, the
    /// station it was reached from and the minutes of that connection.
    pub(crate) fn from_predecessors<F>(
        network: &'a MetroNetwork,
        start: StationIdx,
        target: StationIdx,
        predecessor: F,
    ) -> Option<Self>
    where
        F: Fn(StationIdx) -> Option<(StationIdx, Minutes)>,
    {
        let mut stops = vec![target];
        let mut travel_time: Minutes = 0;
        let mut current = target;

        while current != start {
            let (prev, minutes) = predecessor(current)?;
            travel_time = travel_time.saturating_add(minutes);
            stops.push(prev);
            current = prev;
        }
        stops.reverse(); // Now path is from start to target

        Some(Self {
            network,
            stops,
            travel_time,
        })
    }

    /// Stations in travel order
    pub fn stations(&self) -> impl Iterator<Item = &'a Station> + '_ {
        let network = self.network;
        self.stops.iter().filter_map(move |&idx| network.station(idx))
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.stations().map(|station| station.name.as_str()).collect()
    }

    pub fn station_ids(&self) -> Vec<&'a str> {
        self.stations().map(|station| station.id.as_str()).collect()
    }

    pub fn station_indices(&self) -> &[StationIdx] {
        &self.stops
    }

    pub fn start(&self) -> &'a Station {
        &self.network.stations()[self.stops[0]]
    }

    pub fn target(&self) -> &'a Station {
        &self.network.stations()[self.stops[self.stops.len() - 1]]
    }

    /// Total minutes over all traversed connections
    pub fn travel_time(&self) -> Minutes {
        self.travel_time
    }

    /// Number of connections traversed
    pub fn connections(&self) -> usize {
        self.stops.len() - 1
    }

    /// Number of times consecutive stations belong to different lines
    pub fn line_changes(&self) -> usize {
        self.stations()
            .tuple_windows()
            .filter(|(from, to)| from.line != to.line)
            .count()
    }

    /// Owned, serializable copy of the route
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            stations: self.stations().cloned().collect(),
            connections: self.connections(),
            line_changes: self.line_changes(),
            travel_time: self.travel_time,
        }
    }
}

impl PartialEq for Route<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.network, other.network)
            && self.stops == other.stops
            && self.travel_time == other.travel_time
    }
}

impl Eq for Route<'_> {}

impl fmt::Debug for Route<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("stations", &self.station_ids())
            .field("travel_time", &self.travel_time)
            .finish()
    }
}

impl fmt::Display for Route<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(" -> "))
    }
}

/// Detached route, suitable for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub stations: Vec<Station>,
    pub connections: usize,
    pub line_changes: usize,
    pub travel_time: Minutes,
}

impl RouteSummary {
    pub fn station_ids(&self) -> Vec<&str> {
        self.stations.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn station_names(&self) -> Vec<&str> {
        self.stations.iter().map(|s| s.name.as_str()).collect()
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.station_names().join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_network() -> MetroNetwork {
        let mut network = MetroNetwork::new();
        network.add_station("A", "Alpha", "Red");
        network.add_station("B", "Beta", "Red");
        network.add_station("C", "Gamma", "Blue");
        network.add_connection("A", "B", 4).unwrap();
        network.add_connection("B", "C", 2).unwrap();
        network
    }

    #[test]
    fn rebuilds_path_from_predecessors() {
        let network = line_network();
        let preds = [None, Some((0, 4)), Some((1, 2))];

        let route = Route::from_predecessors(&network, 0, 2, |idx| preds[idx]).unwrap();

        assert_eq!(route.station_indices(), &[0, 1, 2]);
        assert_eq!(route.travel_time(), 6);
        assert_eq!(route.connections(), 2);
        assert_eq!(route.line_changes(), 1);
        assert_eq!(route.start().id, "A");
        assert_eq!(route.target().id, "C");
        assert_eq!(route.to_string(), "Alpha -> Beta -> Gamma");
    }

    #[test]
    fn broken_predecessor_chain_yields_none() {
        let network = line_network();
        let preds = [None, None, Some((1, 2))];

        assert!(Route::from_predecessors(&network, 0, 2, |idx| preds[idx]).is_none());
    }

    #[test]
    fn summary_serializes_stations_in_order() {
        let network = line_network();
        let preds = [None, Some((0, 4)), Some((1, 2))];
        let summary = Route::from_predecessors(&network, 0, 2, |idx| preds[idx])
            .unwrap()
            .summary();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["travel_time"], 6);
        assert_eq!(json["stations"][2]["name"], "Gamma");

        let back: RouteSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
        assert_eq!(back.to_string(), "Alpha -> Beta -> Gamma");
    }
}
