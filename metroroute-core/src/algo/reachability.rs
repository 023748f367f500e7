//! Stations reachable from a start station within a travel time budget.

use serde::Serialize;

use crate::model::{MetroNetwork, Station};
use crate::routing::dijkstra_travel_times;
use crate::Minutes;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachableStation<'a> {
    pub station: &'a Station,
    pub travel_time: Minutes,
}

/// Every station reachable from `start_id` in at most `max_minutes`,
/// the start itself included, sorted by travel time then station id.
///
/// Returns `None` if `start_id` is not in the network.
pub fn reachable_within<'a>(
    network: &'a MetroNetwork,
    start_id: &str,
    max_minutes: Minutes,
) -> Option<Vec<ReachableStation<'a>>> {
    let start = network.station_index(start_id)?;

    let mut reached: Vec<ReachableStation<'a>> =
        dijkstra_travel_times(network, start, Some(max_minutes))
            .into_iter()
            .filter_map(|(idx, travel_time)| {
                network.station(idx).map(|station| ReachableStation {
                    station,
                    travel_time,
                })
            })
            .collect();

    reached.sort_unstable_by(|a, b| {
        a.travel_time
            .cmp(&b.travel_time)
            .then_with(|| a.station.id.cmp(&b.station.id))
    });
    Some(reached)
}
