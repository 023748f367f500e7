use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::define_stub_info_gatherer;

use matrix::py_travel_time_matrix;
use network::{PyMetroNetwork, py_load_metro_network, py_sample_network};
use routing::PyRoute;

pub mod matrix;
pub mod network;
pub mod routing;

/// A Python module implemented in Rust.
#[pymodule]
fn metroroute(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyMetroNetwork>()?;
    m.add_class::<PyRoute>()?;
    m.add_function(wrap_pyfunction!(py_load_metro_network, m)?)?;
    m.add_function(wrap_pyfunction!(py_sample_network, m)?)?;

    m.add_function(wrap_pyfunction!(py_travel_time_matrix, m)?)?;
    Ok(())
}

#[cfg(feature = "stubgen")]
define_stub_info_gatherer!(stub_info);
