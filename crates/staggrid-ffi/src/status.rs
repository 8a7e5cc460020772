//! C-compatible status codes.

use staggrid::GridError;

/// Status code returned by every FFI function.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable; the first
/// three mirror the variants of [`GridError`].
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridStatus {
    /// Success.
    Ok = 0,
    /// The grid has no extent.
    SingularGrid = -1,
    /// Positions do not increase strictly.
    NonMonotonicGrid = -2,
    /// Positions are missing for the declared layout.
    MissingPositions = -3,
    /// Handle is invalid or was already destroyed.
    InvalidHandle = -4,
    /// A pointer is null or a tag is out of range.
    InvalidArgument = -5,
    /// Caller-provided buffer is too small.
    BufferTooSmall = -6,
    /// Internal error (poisoned mutex after a prior panic).
    InternalError = -7,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&GridError> for GridStatus {
    fn from(e: &GridError) -> Self {
        match e {
            GridError::SingularGrid => GridStatus::SingularGrid,
            GridError::NonMonotonic { .. } => GridStatus::NonMonotonicGrid,
            GridError::MissingPositions { .. } => GridStatus::MissingPositions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_values_are_stable() {
        assert_eq!(GridStatus::Ok as i32, 0);
        assert_eq!(GridStatus::SingularGrid as i32, -1);
        assert_eq!(GridStatus::NonMonotonicGrid as i32, -2);
        assert_eq!(GridStatus::MissingPositions as i32, -3);
        assert_eq!(GridStatus::InvalidHandle as i32, -4);
        assert_eq!(GridStatus::InvalidArgument as i32, -5);
        assert_eq!(GridStatus::BufferTooSmall as i32, -6);
        assert_eq!(GridStatus::InternalError as i32, -7);
        assert_eq!(GridStatus::Panicked as i32, -128);
    }

    #[test]
    fn grid_error_to_status() {
        assert_eq!(
            GridStatus::from(&GridError::SingularGrid),
            GridStatus::SingularGrid
        );
        assert_eq!(
            GridStatus::from(&GridError::NonMonotonic { index: 3 }),
            GridStatus::NonMonotonicGrid
        );
        assert_eq!(
            GridStatus::from(&GridError::MissingPositions {
                expected: Some(5),
                actual: 4
            }),
            GridStatus::MissingPositions
        );
    }
}
