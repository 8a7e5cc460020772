//! Grid1D: Python wrapper around the grid FFI handle.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::PyTuple;

use staggrid_ffi::{
    staggrid_grid_at, staggrid_grid_at_len, staggrid_grid_create, staggrid_grid_destroy,
    staggrid_grid_from_slice, staggrid_grid_span,
};

use crate::error::check_status;

/// Family of grid positions.
#[pyclass(eq, eq_int, from_py_object)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Position {
    /// Cell boundaries.
    Walls = 0,
    /// Cell midpoints.
    Centers = 1,
}

/// A one-dimensional staggered grid.
///
/// Grid1D(positions) spans the whole array, with centers at even indices
/// and walls at odd ones.
///
/// Grid1D(nbulk_cells, ilower_wall, positions) describes `nbulk_cells` bulk
/// cells whose lower wall is `positions[ilower_wall]`, with at least one
/// ghost center on each side.
#[pyclass]
pub(crate) struct Grid1D {
    handle: u64,
}

#[pymethods]
impl Grid1D {
    #[new]
    #[pyo3(signature = (*args))]
    fn new(args: &Bound<'_, PyTuple>) -> PyResult<Self> {
        let mut handle = 0u64;
        let status = match args.len() {
            1 => {
                let positions = positions_arg(&args.get_item(0)?)?;
                staggrid_grid_from_slice(positions.as_ptr(), positions.len(), &mut handle)
            }
            3 => {
                let nbulk_cells: usize = args.get_item(0)?.extract()?;
                let ilower_wall: usize = args.get_item(1)?.extract()?;
                let positions = positions_arg(&args.get_item(2)?)?;
                staggrid_grid_create(
                    nbulk_cells,
                    ilower_wall,
                    positions.as_ptr(),
                    positions.len(),
                    &mut handle,
                )
            }
            n => {
                return Err(PyTypeError::new_err(format!(
                    "Grid1D() takes 1 or 3 positional arguments but {n} were given"
                )))
            }
        };
        check_status(status)?;
        Ok(Grid1D { handle })
    }

    /// Distance between the lower and upper bounds of the grid.
    fn span(&self) -> PyResult<f64> {
        let mut span = 0.0;
        check_status(staggrid_grid_span(self.handle, &mut span))?;
        Ok(span)
    }

    /// Wall or center positions as a new NumPy array.
    fn at<'py>(
        &self,
        py: Python<'py>,
        position: Position,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let tag = position as i32;
        let mut len = 0usize;
        check_status(staggrid_grid_at_len(self.handle, tag, &mut len))?;

        let mut buf = vec![0.0; len];
        let mut written = 0usize;
        check_status(staggrid_grid_at(
            self.handle,
            tag,
            buf.as_mut_ptr(),
            buf.len(),
            &mut written,
        ))?;
        buf.truncate(written);
        Ok(PyArray1::from_vec(py, buf))
    }

    fn __repr__(&self) -> PyResult<String> {
        Ok(format!("Grid1D(span={})", self.span()?))
    }
}

impl Drop for Grid1D {
    fn drop(&mut self) {
        staggrid_grid_destroy(self.handle);
    }
}

/// Read positions from a float64 NumPy array (any stride) or any sequence
/// of floats.
fn positions_arg(obj: &Bound<'_, PyAny>) -> PyResult<Vec<f64>> {
    if let Ok(array) = obj.extract::<PyReadonlyArray1<'_, f64>>() {
        return Ok(array.as_array().iter().copied().collect());
    }
    Ok(obj.extract::<Vec<f64>>()?)
}
