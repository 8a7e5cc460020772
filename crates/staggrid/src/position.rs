//! Selector for the two interleaved families of grid positions.

/// Which family of positions to read from a [`Grid1D`](crate::Grid1D).
///
/// # Examples
///
/// ```
/// use staggrid::{Grid1D, Position};
///
/// let grid = Grid1D::new(1, 1, &[-0.5, 0.0, 0.5, 1.0, 1.5]).unwrap();
/// assert_eq!(grid.at(Position::Walls), vec![0.0, 1.0]);
/// assert_eq!(grid.at(Position::Centers), vec![-0.5, 0.5, 1.5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// Cell boundaries.
    Walls,
    /// Cell midpoints.
    Centers,
}
