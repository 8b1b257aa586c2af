//! Grid storage for Potfield.
//!
//! [`Grid`] is a pure container: a contiguous row-major buffer of
//! [`Vector2`](potfield_core::Vector2) cells with in-place reset and
//! read/write access. Bounds and lifecycle rules belong to the engine,
//! which validates coordinates with [`check_bounds`] before touching
//! the grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::SpaceError;
pub use grid::{check_bounds, Grid, GridDims, MAX_CELLS};
