//! Error types for grid construction.

use std::fmt;

/// Reasons a sequence of positions is rejected as a staggered grid.
///
/// Checks run in declaration order; the first failing one is reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no extent: no bulk cell, or fewer than two positions.
    SingularGrid,
    /// Positions do not increase strictly.
    NonMonotonic {
        /// Index of the first position that is not smaller than its successor.
        index: usize,
    },
    /// The sequence is too short for the declared layout, or lacks a ghost
    /// center below the lower wall.
    MissingPositions {
        /// Minimum number of positions the layout needs, or `None` when no
        /// length fits (lower bulk wall at index 0).
        expected: Option<usize>,
        /// Number of positions supplied.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingularGrid => write!(f, "grids must span over at least one cell"),
            Self::NonMonotonic { index } => write!(
                f,
                "positions must increase strictly (position {index} is not below position {})",
                index + 1
            ),
            Self::MissingPositions {
                expected: Some(expected),
                actual,
            } => write!(
                f,
                "layout needs at least {expected} positions with a ghost center on each side, got {actual}"
            ),
            Self::MissingPositions {
                expected: None,
                actual,
            } => write!(
                f,
                "lower bulk wall at index 0 leaves no ghost center below it ({actual} positions supplied)"
            ),
        }
    }
}

impl std::error::Error for GridError {}
