//! Grid lifecycle FFI: create, query, destroy.

use std::sync::Mutex;

use staggrid::{Grid1D, GridError};

use crate::handle::HandleTable;
use crate::status::GridStatus;
use crate::types::GridPosition;

static GRIDS: Mutex<HandleTable<Grid1D>> = Mutex::new(HandleTable::new());

/// Borrow `len` positions from C. A null pointer is accepted only when
/// `len == 0`.
#[allow(unsafe_code)]
fn positions_from_raw<'a>(positions: *const f64, len: usize) -> Option<&'a [f64]> {
    if len == 0 {
        return Some(&[]);
    }
    if positions.is_null() {
        return None;
    }
    // SAFETY: caller guarantees `positions` is valid for `len` reads and
    // is not mutated for the duration of the call.
    Some(unsafe { std::slice::from_raw_parts(positions, len) })
}

/// Insert a freshly built grid and write its handle to `grid_out`.
#[allow(unsafe_code)]
fn register(result: Result<Grid1D, GridError>, grid_out: *mut u64) -> i32 {
    let grid = match result {
        Ok(g) => g,
        Err(e) => return GridStatus::from(&e) as i32,
    };
    let handle = ffi_lock!(GRIDS).insert(grid);
    // SAFETY: grid_out was checked non-null by the caller of `register`.
    unsafe { *grid_out = handle };
    GridStatus::Ok as i32
}

/// Create a grid of `nbulk_cells` bulk cells whose lower bulk wall is
/// `positions[ilower_wall]`.
///
/// On success, writes the grid handle to `grid_out`. On a validation
/// failure, returns the matching [`GridStatus`] code and leaves `grid_out`
/// untouched.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn staggrid_grid_create(
    nbulk_cells: usize,
    ilower_wall: usize,
    positions: *const f64,
    len: usize,
    grid_out: *mut u64,
) -> i32 {
    ffi_guard!({
        if grid_out.is_null() {
            return GridStatus::InvalidArgument as i32;
        }
        let positions = match positions_from_raw(positions, len) {
            Some(p) => p,
            None => return GridStatus::InvalidArgument as i32,
        };
        register(Grid1D::new(nbulk_cells, ilower_wall, positions), grid_out)
    })
}

/// Create a grid spanning the whole of `positions`.
///
/// Centers sit at even indices and walls at odd ones.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn staggrid_grid_from_slice(
    positions: *const f64,
    len: usize,
    grid_out: *mut u64,
) -> i32 {
    ffi_guard!({
        if grid_out.is_null() {
            return GridStatus::InvalidArgument as i32;
        }
        let positions = match positions_from_raw(positions, len) {
            Some(p) => p,
            None => return GridStatus::InvalidArgument as i32,
        };
        register(Grid1D::from_slice(positions), grid_out)
    })
}

/// Destroy a grid, releasing its positions.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn staggrid_grid_destroy(grid_handle: u64) -> i32 {
    ffi_guard!({
        match ffi_lock!(GRIDS).remove(grid_handle) {
            Some(_) => GridStatus::Ok as i32,
            None => GridStatus::InvalidHandle as i32,
        }
    })
}

/// Write the distance between the grid's bounds to `span_out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn staggrid_grid_span(grid_handle: u64, span_out: *mut f64) -> i32 {
    ffi_guard!({
        if span_out.is_null() {
            return GridStatus::InvalidArgument as i32;
        }
        let span = match ffi_lock!(GRIDS).get(grid_handle) {
            Some(g) => g.span(),
            None => return GridStatus::InvalidHandle as i32,
        };
        // SAFETY: span_out is non-null and valid per caller contract.
        unsafe { *span_out = span };
        GridStatus::Ok as i32
    })
}

/// Write the number of wall or center positions to `len_out`.
///
/// Use this to size the buffer passed to [`staggrid_grid_at`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn staggrid_grid_at_len(
    grid_handle: u64,
    position: i32,
    len_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if len_out.is_null() {
            return GridStatus::InvalidArgument as i32;
        }
        let position = match GridPosition::from_raw(position) {
            Some(p) => p,
            None => return GridStatus::InvalidArgument as i32,
        };
        let len = match ffi_lock!(GRIDS).get(grid_handle) {
            Some(g) => g.count_at(position.into()),
            None => return GridStatus::InvalidHandle as i32,
        };
        // SAFETY: len_out is non-null and valid per caller contract.
        unsafe { *len_out = len };
        GridStatus::Ok as i32
    })
}

/// Copy the wall or center positions into a caller-allocated buffer.
///
/// `buf` must hold at least `staggrid_grid_at_len()` elements, otherwise
/// [`GridStatus::BufferTooSmall`] is returned and nothing is written. `n_out`, if not
/// null, receives the number of elements written.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn staggrid_grid_at(
    grid_handle: u64,
    position: i32,
    buf: *mut f64,
    cap: usize,
    n_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if buf.is_null() {
            return GridStatus::InvalidArgument as i32;
        }
        let position = match GridPosition::from_raw(position) {
            Some(p) => p,
            None => return GridStatus::InvalidArgument as i32,
        };
        let grids = ffi_lock!(GRIDS);
        let grid = match grids.get(grid_handle) {
            Some(g) => g,
            None => return GridStatus::InvalidHandle as i32,
        };
        let values = grid.at(position.into());
        if cap < values.len() {
            return GridStatus::BufferTooSmall as i32;
        }
        // SAFETY: buf is non-null and valid for `cap` writes per caller
        // contract, and `values.len() <= cap`.
        let out = unsafe { std::slice::from_raw_parts_mut(buf, values.len()) };
        out.copy_from_slice(&values);
        if !n_out.is_null() {
            // SAFETY: n_out is non-null and valid per caller contract.
            unsafe { *n_out = values.len() };
        }
        GridStatus::Ok as i32
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_CELL: [f64; 5] = [-0.5, 0.0, 0.5, 1.0, 1.5];

    fn create(nbulk: usize, ilower: usize, positions: &[f64]) -> Result<u64, i32> {
        let mut h = 0u64;
        match staggrid_grid_create(nbulk, ilower, positions.as_ptr(), positions.len(), &mut h) {
            0 => Ok(h),
            code => Err(code),
        }
    }

    #[test]
    fn create_span_destroy_round_trip() {
        let h = create(1, 1, &ONE_CELL).unwrap();
        let mut span = 0.0;
        assert_eq!(staggrid_grid_span(h, &mut span), GridStatus::Ok as i32);
        assert_eq!(span, 1.0);
        assert_eq!(staggrid_grid_destroy(h), GridStatus::Ok as i32);
    }

    #[test]
    fn validation_failures_map_to_status() {
        assert_eq!(create(0, 1, &[]), Err(GridStatus::SingularGrid as i32));
        assert_eq!(
            create(1, 1, &[-0.5, 0.0, 1.5, 1.0, 1.5]),
            Err(GridStatus::NonMonotonicGrid as i32)
        );
        assert_eq!(
            create(1, 1, &[-0.5, 0.0, 0.5, 1.0]),
            Err(GridStatus::MissingPositions as i32)
        );
        assert_eq!(
            create(1, 0, &ONE_CELL),
            Err(GridStatus::MissingPositions as i32)
        );
    }

    #[test]
    fn from_slice_accepts_null_only_when_empty() {
        let mut h = 0u64;
        assert_eq!(
            staggrid_grid_from_slice(std::ptr::null(), 0, &mut h),
            GridStatus::SingularGrid as i32
        );
        assert_eq!(
            staggrid_grid_from_slice(std::ptr::null(), 3, &mut h),
            GridStatus::InvalidArgument as i32
        );
    }

    #[test]
    fn from_slice_span() {
        let xs = [1.0, 1.5, 2.0];
        let mut h = 0u64;
        assert_eq!(
            staggrid_grid_from_slice(xs.as_ptr(), xs.len(), &mut h),
            GridStatus::Ok as i32
        );
        let mut span = 0.0;
        staggrid_grid_span(h, &mut span);
        assert_eq!(span, 1.0);
        staggrid_grid_destroy(h);
    }

    #[test]
    fn null_out_pointers_are_invalid_arguments() {
        assert_eq!(
            staggrid_grid_create(1, 1, ONE_CELL.as_ptr(), 5, std::ptr::null_mut()),
            GridStatus::InvalidArgument as i32
        );
        let h = create(1, 1, &ONE_CELL).unwrap();
        assert_eq!(
            staggrid_grid_span(h, std::ptr::null_mut()),
            GridStatus::InvalidArgument as i32
        );
        assert_eq!(
            staggrid_grid_at_len(h, 0, std::ptr::null_mut()),
            GridStatus::InvalidArgument as i32
        );
        staggrid_grid_destroy(h);
    }

    #[test]
    fn double_destroy_returns_invalid_handle() {
        let h = create(1, 1, &ONE_CELL).unwrap();
        assert_eq!(staggrid_grid_destroy(h), GridStatus::Ok as i32);
        assert_eq!(staggrid_grid_destroy(h), GridStatus::InvalidHandle as i32);
        let mut span = 0.0;
        assert_eq!(
            staggrid_grid_span(h, &mut span),
            GridStatus::InvalidHandle as i32
        );
    }

    #[test]
    fn at_fills_caller_buffer() {
        let h = create(1, 1, &ONE_CELL).unwrap();

        let mut len = 0usize;
        assert_eq!(
            staggrid_grid_at_len(h, GridPosition::Centers as i32, &mut len),
            GridStatus::Ok as i32
        );
        assert_eq!(len, 3);

        let mut buf = vec![0.0; len];
        let mut written = 0usize;
        assert_eq!(
            staggrid_grid_at(
                h,
                GridPosition::Centers as i32,
                buf.as_mut_ptr(),
                buf.len(),
                &mut written
            ),
            GridStatus::Ok as i32
        );
        assert_eq!(written, 3);
        assert_eq!(buf, vec![-0.5, 0.5, 1.5]);

        let mut walls = [0.0; 4];
        assert_eq!(
            staggrid_grid_at(
                h,
                GridPosition::Walls as i32,
                walls.as_mut_ptr(),
                walls.len(),
                std::ptr::null_mut()
            ),
            GridStatus::Ok as i32
        );
        assert_eq!(&walls[..2], &[0.0, 1.0]);

        staggrid_grid_destroy(h);
    }

    #[test]
    fn at_rejects_small_buffer_and_unknown_position() {
        let h = create(1, 1, &ONE_CELL).unwrap();
        let mut buf = [7.0; 2];
        assert_eq!(
            staggrid_grid_at(
                h,
                GridPosition::Centers as i32,
                buf.as_mut_ptr(),
                2,
                std::ptr::null_mut()
            ),
            GridStatus::BufferTooSmall as i32
        );
        assert_eq!(buf, [7.0; 2]);
        assert_eq!(
            staggrid_grid_at(h, 9, buf.as_mut_ptr(), 2, std::ptr::null_mut()),
            GridStatus::InvalidArgument as i32
        );
        staggrid_grid_destroy(h);
    }
}
