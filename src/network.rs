use metroroute_core::prelude::*;

use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

use crate::routing::PyRoute;

/// MetroNetwork
///
/// An undirected metro network of stations joined by connections weighted
/// with travel time in minutes.
///
/// Stations are added with ``add_station``, connections with
/// ``add_connection``. Both route queries return ``None`` when either
/// station is unknown or no route exists.
///
/// Example:
///
/// .. code-block:: python
///
///     metro = MetroNetwork()
///     metro.add_station("K1", "Kizilay", "Red Line")
///     metro.add_station("K2", "Ulus", "Red Line")
///     metro.add_connection("K1", "K2", 4)
///     route = metro.find_fastest_route("K1", "K2")
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "MetroNetwork")]
pub struct PyMetroNetwork {
    pub(crate) network: MetroNetwork,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyMetroNetwork {
    #[new]
    pub fn new() -> Self {
        PyMetroNetwork {
            network: MetroNetwork::new(),
        }
    }

    /// Add a station; a duplicate id is ignored and the first one kept
    pub fn add_station(&mut self, station_id: &str, name: &str, line: &str) -> usize {
        self.network.add_station(station_id, name, line)
    }

    /// Connect two stations in both directions
    ///
    /// Raises
    /// ------
    /// KeyError
    ///     If either station has not been added
    pub fn add_connection(&mut self, from_id: &str, to_id: &str, minutes: Minutes) -> PyResult<()> {
        self.network
            .add_connection(from_id, to_id, minutes)
            .map_err(to_py_err)
    }

    /// Route with the fewest connections, or None
    pub fn find_least_transfers(&self, start_id: &str, target_id: &str) -> Option<PyRoute> {
        self.network
            .find_least_transfers(start_id, target_id)
            .map(|route| PyRoute::from(&route))
    }

    /// Route with the lowest total travel time, or None
    pub fn find_fastest_route(&self, start_id: &str, target_id: &str) -> Option<PyRoute> {
        self.network
            .find_fastest_route(start_id, target_id)
            .map(|route| PyRoute::from(&route))
    }

    /// ``(station_id, minutes)`` pairs reachable within ``max_minutes``,
    /// sorted by travel time. None for an unknown start station.
    pub fn reachable_within(&self, start_id: &str, max_minutes: Minutes) -> Option<Vec<(String, Minutes)>> {
        reachable_within(&self.network, start_id, max_minutes).map(|reached| {
            reached
                .into_iter()
                .map(|r| (r.station.id.clone(), r.travel_time))
                .collect()
        })
    }

    pub fn station_count(&self) -> usize {
        self.network.station_count()
    }

    pub fn connection_count(&self) -> usize {
        self.network.connection_count()
    }

    pub fn lines(&self) -> Vec<String> {
        self.network.lines().into_iter().map(str::to_string).collect()
    }

    /// Station ids of a line in insertion order
    pub fn line_stations(&self, line: &str) -> Vec<String> {
        self.network
            .line_stations(line)
            .map(|stations| stations.map(|s| s.id.clone()).collect())
            .unwrap_or_default()
    }

    pub fn network_info(&self) -> String {
        self.network.network_info()
    }

    fn __len__(&self) -> usize {
        self.network.station_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "MetroNetwork with {} stations, {} connections and {} lines",
            self.network.station_count(),
            self.network.connection_count(),
            self.network.line_count()
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

impl Default for PyMetroNetwork {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn to_py_err(e: Error) -> PyErr {
    match e {
        Error::UnknownStation(id) => {
            PyErr::new::<pyo3::exceptions::PyKeyError, _>(format!("Unknown station: {id}"))
        }
        other => PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "Failed to load metro network: {other}"
        )),
    }
}

/// Create a metro network from CSV feed directories
///
/// Each directory must contain ``stations.csv`` (``station_id,name,line``)
/// and ``connections.csv`` (``from_station_id,to_station_id,minutes``).
///
/// Parameters
/// ----------
/// feed_dirs : list[str]
///     Feed directories, merged in order
///
/// Returns
/// -------
/// MetroNetwork
///
/// Raises
/// ------
/// KeyError
///     If a connection references a station no feed defines
/// RuntimeError
///     If a feed cannot be read
///
/// Notes
/// -----
/// The function releases the GIL while reading the feeds to allow other Python threads to continue execution.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "load_metro_network")]
pub fn py_load_metro_network(py: Python<'_>, feed_dirs: Vec<String>) -> PyResult<PyMetroNetwork> {
    // Allow Python threads during blocking file I/O
    py.detach(|| {
        let config =
            NetworkConfig::new(feed_dirs.into_iter().map(std::path::PathBuf::from).collect());
        let network = create_metro_network(&config).map_err(to_py_err)?;
        Ok(PyMetroNetwork { network })
    })
}

/// Three-line sample network with transfers at Kizilay, Demetevler and Gar
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "sample_network")]
pub fn py_sample_network() -> PyMetroNetwork {
    PyMetroNetwork {
        network: sample_network(),
    }
}
