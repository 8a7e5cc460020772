//! GridStatus -> Python exception mapping with recovery hints.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyRuntimeError, PyValueError};
use pyo3::PyResult;

use staggrid_ffi::GridStatus;

create_exception!(staggrid, StaggridError, PyException);
create_exception!(staggrid, SingularGridError, StaggridError);
create_exception!(staggrid, NonMonotonicGridError, StaggridError);
create_exception!(staggrid, MissingPositionsGridError, StaggridError);

/// Check an FFI status code. Returns `Ok(())` on success, raises a typed
/// Python exception with a recovery hint on error.
pub(crate) fn check_status(code: i32) -> PyResult<()> {
    if code == GridStatus::Ok as i32 {
        return Ok(());
    }
    let (msg, hint) = error_detail(code);
    let full = format!("staggrid error {code}: {msg}\n  Hint: {hint}");
    match code {
        x if x == GridStatus::SingularGrid as i32 => Err(SingularGridError::new_err(full)),
        x if x == GridStatus::NonMonotonicGrid as i32 => {
            Err(NonMonotonicGridError::new_err(full))
        }
        x if x == GridStatus::MissingPositions as i32 => {
            Err(MissingPositionsGridError::new_err(full))
        }
        x if x == GridStatus::InvalidHandle as i32
            || x == GridStatus::InvalidArgument as i32
            || x == GridStatus::BufferTooSmall as i32 =>
        {
            Err(PyValueError::new_err(full))
        }
        _ => Err(PyRuntimeError::new_err(full)),
    }
}

/// Returns `(message, recovery_hint)` for each FFI status code.
fn error_detail(code: i32) -> (&'static str, &'static str) {
    match code {
        -1 => (
            "singular grid",
            "A grid needs at least one bulk cell, or at least two positions \
             when built from positions alone.",
        ),
        -2 => (
            "positions are not strictly increasing",
            "Sort the positions and remove duplicates and NaN values.",
        ),
        -3 => (
            "missing positions for the declared layout",
            "The array must hold ilower_wall + 2 * nbulk_cells + 2 positions \
             at least, with ilower_wall >= 1 so that a ghost center bounds \
             the bulk on each side.",
        ),
        -4 => (
            "invalid grid handle",
            "The grid has already been released. Build a new Grid1D.",
        ),
        -5 => (
            "invalid argument",
            "Positions must be a one-dimensional sequence of floats.",
        ),
        -6 => (
            "output buffer too small",
            "This indicates a bug in the bindings; please report it.",
        ),
        -7 => (
            "internal error",
            "A previous call panicked and left the grid table unusable. \
             Restart the interpreter.",
        ),
        -128 => (
            "panic in native code",
            "This indicates a bug in staggrid; please report it.",
        ),
        _ => (
            "unknown staggrid error",
            "An unrecognized error code was returned from the FFI layer. \
             This may indicate a version mismatch between the Python \
             bindings and the native library.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_known_codes_have_detail() {
        for code in (-7..=-1).chain([-128]) {
            let (msg, hint) = error_detail(code);
            assert!(!msg.is_empty(), "code {code} has empty msg");
            assert!(!hint.contains("version mismatch"), "code {code} has no detail");
        }
    }

    #[test]
    fn unknown_code_returns_fallback() {
        let (msg, hint) = error_detail(-999);
        assert!(msg.contains("unknown"));
        assert!(hint.contains("version mismatch"));
    }
}
