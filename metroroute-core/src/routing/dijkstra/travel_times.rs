use std::collections::BinaryHeap;

use hashbrown::HashMap;

use super::state::State;
use crate::model::MetroNetwork;
use crate::{Minutes, StationIdx};

/// Dijkstra's algorithm from `start` to every reachable station.
///
/// Returns a map of station indices to travel times in minutes, the start
/// included at 0. With `max_time` set, stations farther away than the budget
/// are left out. An index outside the network yields an empty map.
pub fn dijkstra_travel_times(
    network: &MetroNetwork,
    start: StationIdx,
    max_time: Option<Minutes>,
) -> HashMap<StationIdx, Minutes> {
    let mut distances: HashMap<StationIdx, Minutes> = HashMap::new();
    let Some(start_station) = network.station(start) else {
        return distances;
    };

    let mut heap = BinaryHeap::new();
    heap.push(State {
        cost: 0,
        node: start,
        id: &start_station.id,
    });
    distances.insert(start, 0);

    while let Some(State { cost, node, .. }) = heap.pop() {
        // Skip if we've found a better path
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for &(next, minutes) in network.neighbors(node) {
            let next_cost = cost.saturating_add(minutes);
            if max_time.is_some_and(|max| next_cost > max) {
                continue;
            }

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                    } else {
                        continue;
                    }
                }
            }
            heap.push(State {
                cost: next_cost,
                node: next,
                id: &network.stations()[next].id,
            });
        }
    }

    distances
}

#[cfg(test)]
mod tests {
    use super::dijkstra_travel_times;
    use crate::model::MetroNetwork;

    fn chain() -> MetroNetwork {
        let mut network = MetroNetwork::new();
        for id in ["A", "B", "C", "D"] {
            network.add_station(id, id, "Line");
        }
        network.add_station("X", "Island", "Line");
        network.add_connection("A", "B", 2).unwrap();
        network.add_connection("B", "C", 3).unwrap();
        network.add_connection("C", "D", 4).unwrap();
        network.add_connection("A", "D", 20).unwrap();
        network
    }

    #[test]
    fn reaches_every_connected_station() {
        let network = chain();
        let times = dijkstra_travel_times(&network, 0, None);

        assert_eq!(times.len(), 4);
        assert_eq!(times[&0], 0);
        assert_eq!(times[&1], 2);
        assert_eq!(times[&2], 5);
        assert_eq!(times[&3], 9);
        assert!(!times.contains_key(&4));
    }

    #[test]
    fn respects_time_budget() {
        let network = chain();
        let times = dijkstra_travel_times(&network, 0, Some(5));

        assert_eq!(times.len(), 3);
        assert_eq!(times.get(&2), Some(&5));
        assert_eq!(times.get(&3), None);
    }

    #[test]
    fn unknown_start_is_empty() {
        let network = chain();
        assert!(dijkstra_travel_times(&network, 99, None).is_empty());
    }
}
