//! C-compatible position selector.

use staggrid::Position;

/// Family of positions for `staggrid_grid_at` and `staggrid_grid_at_len`.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridPosition {
    /// Cell boundaries.
    Walls = 0,
    /// Cell midpoints.
    Centers = 1,
}

impl GridPosition {
    /// Decode a raw tag received from C. Returns `None` for unknown tags.
    pub fn from_raw(tag: i32) -> Option<Self> {
        match tag {
            x if x == Self::Walls as i32 => Some(Self::Walls),
            x if x == Self::Centers as i32 => Some(Self::Centers),
            _ => None,
        }
    }
}

impl From<GridPosition> for Position {
    fn from(p: GridPosition) -> Self {
        match p {
            GridPosition::Walls => Position::Walls,
            GridPosition::Centers => Position::Centers,
        }
    }
}
