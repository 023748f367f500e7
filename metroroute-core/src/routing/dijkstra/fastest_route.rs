use std::collections::BinaryHeap;

use hashbrown::HashMap;

use super::state::State;
use crate::model::MetroNetwork;
use crate::routing::Route;
use crate::{Minutes, StationIdx};

/// Dijkstra's algorithm for the route with the lowest total travel time.
///
/// Stops as soon as `target` is popped from the queue, which is correct for
/// non-negative weights. The path is rebuilt from predecessor pointers.
pub(crate) fn fastest_route(
    network: &MetroNetwork,
    start: StationIdx,
    target: StationIdx,
) -> Option<Route<'_>> {
    let start_station = network.station(start)?;
    network.station(target)?;

    let mut best_known: HashMap<StationIdx, Minutes> = HashMap::new();
    // Station we came from and the minutes of the connection used
    let mut predecessors: HashMap<StationIdx, (StationIdx, Minutes)> = HashMap::new();
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0,
        node: start,
        id: &start_station.id,
    });
    best_known.insert(start, 0);

    while let Some(State { cost, node, .. }) = heap.pop() {
        if node == target {
            return Route::from_predecessors(network, start, target, |idx| {
                predecessors.get(&idx).copied()
            });
        }

        // Skip stale entries superseded by a cheaper path
        if best_known.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for &(next, minutes) in network.neighbors(node) {
            let next_cost = cost.saturating_add(minutes);

            let improved = match best_known.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    true
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        true
                    } else {
                        false
                    }
                }
            };

            if improved {
                predecessors.insert(next, (node, minutes));
                heap.push(State {
                    cost: next_cost,
                    node: next,
                    id: &network.stations()[next].id,
                });
            }
        }
    }

    None
}
