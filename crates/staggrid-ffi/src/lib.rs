//! C FFI bindings for staggrid.
//!
//! Grids live in a global handle table and are referred to from C by
//! opaque `u64` handles. Every function returns a [`GridStatus`] code as
//! `i32`; results are written through caller-provided pointers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, turning a panic into [`GridStatus::Panicked`].
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| -> i32 { $body })) {
            Ok(code) => code,
            Err(_) => {
                log::warn!("panic caught at the staggrid FFI boundary");
                $crate::status::GridStatus::Panicked as i32
            }
        }
    };
}

/// Lock a global table, returning [`GridStatus::InternalError`] from the
/// enclosing body if the mutex is poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => {
                log::warn!("staggrid handle table poisoned by an earlier panic");
                return $crate::status::GridStatus::InternalError as i32;
            }
        }
    };
}

pub mod grid;
mod handle;
pub mod status;
pub mod types;

pub use grid::{
    staggrid_grid_at, staggrid_grid_at_len, staggrid_grid_create, staggrid_grid_destroy,
    staggrid_grid_from_slice, staggrid_grid_span,
};
pub use status::GridStatus;
pub use types::GridPosition;
