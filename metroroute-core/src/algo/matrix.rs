//! Travel time matrix between a set of stations

use rayon::prelude::*;

use crate::model::MetroNetwork;
use crate::routing::dijkstra_travel_times;
use crate::Minutes;

/// Fastest travel times between every pair of the given stations.
///
/// `result[i][j]` is the travel time from `station_ids[i]` to
/// `station_ids[j]`, or `None` when either id is unknown or `j` is
/// unreachable from `i`. Rows are computed in parallel.
pub fn travel_time_matrix<S>(network: &MetroNetwork, station_ids: &[S]) -> Vec<Vec<Option<Minutes>>>
where
    S: AsRef<str> + Sync,
{
    let indices: Vec<_> = station_ids
        .iter()
        .map(|id| network.station_index(id.as_ref()))
        .collect();

    indices
        .par_iter()
        .map(|start| match start {
            Some(start) => {
                let times = dijkstra_travel_times(network, *start, None);
                indices
                    .iter()
                    .map(|target| target.and_then(|idx| times.get(&idx).copied()))
                    .collect()
            }
            None => vec![None; indices.len()],
        })
        .collect()
}
