//! Validated one-dimensional staggered grid.

use crate::error::GridError;
use crate::position::Position;
use std::cmp::Ordering;

/// A one-dimensional staggered grid.
///
/// Holds a strictly increasing sequence of positions in which walls and
/// centers alternate. Construction validates the sequence; a `Grid1D` is
/// immutable afterwards.
///
/// # Examples
///
/// ```
/// use staggrid::{Grid1D, GridError};
///
/// // One bulk cell bounded by walls at 0 and 1, one ghost center each side.
/// let grid = Grid1D::new(1, 1, &[-0.5, 0.0, 0.5, 1.0, 1.5]).unwrap();
/// assert_eq!(grid.span(), 1.0);
///
/// // Missing the ghost center above the upper wall.
/// let err = Grid1D::new(1, 1, &[-0.5, 0.0, 0.5, 1.0]).unwrap_err();
/// assert!(matches!(err, GridError::MissingPositions { .. }));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid1D {
    positions: Vec<f64>,
    ilower: usize,
    iupper: usize,
    /// 0 if walls sit at even indices, 1 if at odd ones.
    wall_parity: usize,
}

impl Grid1D {
    /// Create a grid of `nbulk_cells` bulk cells whose lower bulk wall is
    /// `positions[ilower_wall]`.
    ///
    /// The upper bulk wall is `positions[ilower_wall + 2 * nbulk_cells]`.
    /// At least one ghost center must precede the lower wall and follow the
    /// upper one; further ghost positions on either side are allowed.
    ///
    /// Returns `Err(GridError::SingularGrid)` if `nbulk_cells == 0`,
    /// `Err(GridError::NonMonotonic)` if positions do not increase strictly,
    /// and `Err(GridError::MissingPositions)` if the layout does not fit.
    pub fn new(
        nbulk_cells: usize,
        ilower_wall: usize,
        positions: &[f64],
    ) -> Result<Self, GridError> {
        if nbulk_cells == 0 {
            return Err(rejected(GridError::SingularGrid));
        }
        check_increasing(positions).map_err(rejected)?;

        if ilower_wall == 0 {
            return Err(rejected(GridError::MissingPositions {
                expected: None,
                actual: positions.len(),
            }));
        }
        let expected = nbulk_cells
            .saturating_mul(2)
            .saturating_add(ilower_wall)
            .saturating_add(2);
        if positions.len() < expected {
            return Err(rejected(GridError::MissingPositions {
                expected: Some(expected),
                actual: positions.len(),
            }));
        }

        let grid = Self {
            positions: positions.to_vec(),
            ilower: ilower_wall,
            iupper: ilower_wall + 2 * nbulk_cells,
            wall_parity: ilower_wall % 2,
        };
        log::trace!(
            "built staggered grid: {nbulk_cells} bulk cells, {} positions",
            grid.len()
        );
        Ok(grid)
    }

    /// Create a grid spanning the whole of `positions`.
    ///
    /// Centers sit at even indices and walls at odd ones. The span is the
    /// distance between the first and last positions.
    ///
    /// ```
    /// use staggrid::{Grid1D, GridError};
    ///
    /// assert_eq!(Grid1D::from_slice(&[1.0, 2.0]).unwrap().span(), 1.0);
    /// assert_eq!(Grid1D::from_slice(&[1.0]), Err(GridError::SingularGrid));
    /// ```
    pub fn from_slice(positions: &[f64]) -> Result<Self, GridError> {
        if positions.len() < 2 {
            return Err(rejected(GridError::SingularGrid));
        }
        check_increasing(positions).map_err(rejected)?;
        log::trace!("built grid from {} raw positions", positions.len());
        Ok(Self {
            positions: positions.to_vec(),
            ilower: 0,
            iupper: positions.len() - 1,
            wall_parity: 1,
        })
    }

    /// Distance between the lower and upper bounds of the grid.
    pub fn span(&self) -> f64 {
        self.upper_wall() - self.lower_wall()
    }

    /// The wall or center positions, in increasing order.
    ///
    /// Ghost positions are included.
    pub fn at(&self, position: Position) -> Vec<f64> {
        self.positions
            .iter()
            .skip(self.offset(position))
            .step_by(2)
            .copied()
            .collect()
    }

    /// Number of elements [`at`](Self::at) returns for `position`.
    pub fn count_at(&self, position: Position) -> usize {
        (self.positions.len() + 1 - self.offset(position)) / 2
    }

    /// All positions, walls and centers interleaved.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Total number of positions, ghosts included.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of cells between the lower and upper bounds.
    ///
    /// For a grid built by [`from_slice`](Self::from_slice) this is half
    /// the number of intervals, rounded up, so any grid with a nonzero span
    /// has at least one cell.
    pub fn nbulk_cells(&self) -> usize {
        (self.iupper - self.ilower).div_ceil(2)
    }

    /// Index of the lower bound in [`positions`](Self::positions).
    pub fn ilower_wall(&self) -> usize {
        self.ilower
    }

    /// Index of the upper bound in [`positions`](Self::positions).
    pub fn iupper_wall(&self) -> usize {
        self.iupper
    }

    /// Lower bound of the grid.
    pub fn lower_wall(&self) -> f64 {
        self.positions[self.ilower]
    }

    /// Upper bound of the grid.
    pub fn upper_wall(&self) -> f64 {
        self.positions[self.iupper]
    }

    /// Whether `x` lies within the bounds, inclusive.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower_wall() && x <= self.upper_wall()
    }

    fn offset(&self, position: Position) -> usize {
        match position {
            Position::Walls => self.wall_parity,
            Position::Centers => 1 - self.wall_parity,
        }
    }
}

impl TryFrom<&[f64]> for Grid1D {
    type Error = GridError;

    fn try_from(positions: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(positions)
    }
}

/// Find the first adjacent pair that is not strictly increasing.
///
/// NaN compares as unordered and is rejected along with its neighbour.
fn check_increasing(positions: &[f64]) -> Result<(), GridError> {
    match positions
        .windows(2)
        .position(|pair| pair[0].partial_cmp(&pair[1]) != Some(Ordering::Less))
    {
        Some(index) => Err(GridError::NonMonotonic { index }),
        None => Ok(()),
    }
}

fn rejected(err: GridError) -> GridError {
    log::debug!("rejected staggered grid: {err}");
    err
}
