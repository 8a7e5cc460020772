//! One-dimensional staggered grids for finite-volume solvers.
//!
//! A staggered grid interleaves two families of positions: *walls* (cell
//! boundaries) and *centers* (cell midpoints). [`Grid1D`] validates that a
//! raw sequence of positions forms such an alternating layout before it
//! exposes derived quantities like the [`span`](Grid1D::span) of the grid
//! or the [wall and center subsequences](Grid1D::at).
//!
//! # Layout
//!
//! With [`Grid1D::new`], positions are described by the number of bulk
//! cells and the index of the lower bulk wall. Positions outside the bulk
//! are ghost positions; at least one ghost center is required on each side:
//!
//! ```text
//! index     0     1     2     3     4
//! kind      c     W     c     W     c
//!           ghost |  bulk cell  | ghost
//! ```
//!
//! [`Grid1D::from_slice`] takes the positions alone and treats the whole
//! sequence as the extent of the grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid1d;
pub mod position;

pub use error::GridError;
pub use grid1d::Grid1D;
pub use position::Position;
