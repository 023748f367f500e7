use metroroute_core::prelude::*;
use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::network::PyMetroNetwork;

/// Fastest travel times in minutes between every pair of stations
///
/// ``result[i][j]`` is the time from ``station_ids[i]`` to
/// ``station_ids[j]``, or None if either id is unknown or no route exists.
/// Rows are computed in parallel.
///
/// Notes
/// -----
/// The function releases the GIL during computation to allow other Python threads to continue execution.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "travel_time_matrix")]
pub fn py_travel_time_matrix(
    py: Python<'_>,
    network: &PyMetroNetwork,
    station_ids: Vec<String>,
) -> Vec<Vec<Option<Minutes>>> {
    let network = &network.network;
    py.detach(|| travel_time_matrix(network, &station_ids))
}
