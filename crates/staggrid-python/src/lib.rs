//! Python bindings for staggrid.
//!
//! This crate provides PyO3 bindings wrapping the C FFI layer
//! (`staggrid-ffi`). The native extension is named `_staggrid` and is
//! imported by the pure-Python `staggrid` package.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(unsafe_code)]

use pyo3::prelude::*;

mod error;
mod grid;

/// The native `_staggrid` extension module.
#[pymodule]
fn _staggrid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    m.add_class::<grid::Position>()?;
    m.add_class::<grid::Grid1D>()?;

    m.add("StaggridError", py.get_type::<error::StaggridError>())?;
    m.add("SingularGridError", py.get_type::<error::SingularGridError>())?;
    m.add(
        "NonMonotonicGridError",
        py.get_type::<error::NonMonotonicGridError>(),
    )?;
    m.add(
        "MissingPositionsGridError",
        py.get_type::<error::MissingPositionsGridError>(),
    )?;

    Ok(())
}
