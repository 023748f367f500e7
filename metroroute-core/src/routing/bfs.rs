//! Breadth-first search for the route with the fewest connections

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::model::MetroNetwork;
use crate::routing::Route;
use crate::{Minutes, StationIdx};

/// BFS from `start` to `target`, ignoring travel times.
///
/// The first time the target is dequeued its path is minimal in connection
/// count. Among equally short paths the one discovered first in adjacency
/// insertion order wins, so the result depends on how the network was built.
pub(crate) fn least_transfers(
    network: &MetroNetwork,
    start: StationIdx,
    target: StationIdx,
) -> Option<Route<'_>> {
    let station_count = network.station_count();
    if start >= station_count || target >= station_count {
        return None;
    }

    let mut visited = FixedBitSet::with_capacity(station_count);
    // Station we came from and the minutes of the connection used
    let mut predecessors: Vec<Option<(StationIdx, Minutes)>> = vec![None; station_count];
    let mut frontier = VecDeque::new();

    visited.insert(start);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        if current == target {
            return Route::from_predecessors(network, start, target, |idx| predecessors[idx]);
        }

        for &(next, minutes) in network.neighbors(current) {
            if !visited.put(next) {
                predecessors[next] = Some((current, minutes));
                frontier.push_back(next);
            }
        }
    }

    None
}
