use metroroute_core::prelude::*;
use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pymethods};

/// Route
///
/// Stations from start to target inclusive, with the total travel time of
/// the connections taken. ``str(route)`` joins station names with ``->``.
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "Route")]
#[derive(Clone)]
pub struct PyRoute {
    pub inner: RouteSummary,
}

impl From<&Route<'_>> for PyRoute {
    fn from(route: &Route<'_>) -> Self {
        PyRoute {
            inner: route.summary(),
        }
    }
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyRoute {
    #[getter]
    pub fn station_ids(&self) -> Vec<String> {
        self.inner.stations.iter().map(|s| s.id.clone()).collect()
    }

    #[getter]
    pub fn station_names(&self) -> Vec<String> {
        self.inner.stations.iter().map(|s| s.name.clone()).collect()
    }

    /// Total travel time in minutes
    #[getter]
    pub fn travel_time(&self) -> Minutes {
        self.inner.travel_time
    }

    /// Number of connections traversed
    #[getter]
    pub fn connections(&self) -> usize {
        self.inner.connections
    }

    /// Number of line changes along the route
    #[getter]
    pub fn line_changes(&self) -> usize {
        self.inner.line_changes
    }

    pub fn as_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to serialize Route to JSON: {e}"
            ))
        })
    }

    fn __len__(&self) -> usize {
        self.inner.stations.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Route({} minutes, {} connections: {})",
            self.inner.travel_time, self.inner.connections, self.inner
        )
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}
