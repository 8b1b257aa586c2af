//! Error types for grid construction and coordinate checks.

use std::fmt;

/// Errors arising from grid dimensions or coordinate validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to describe a grid with zero or negative extent.
    EmptyGrid {
        /// Requested row count.
        rows: i64,
        /// Requested column count.
        cols: i64,
    },
    /// `rows * cols` exceeds the permitted cell count.
    TooLarge {
        /// Requested row count.
        rows: i64,
        /// Requested column count.
        cols: i64,
        /// The limit that was exceeded.
        max_cells: usize,
    },
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// Column coordinate.
        x: i64,
        /// Row coordinate.
        y: i64,
        /// Row count of the grid.
        rows: usize,
        /// Column count of the grid.
        cols: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid {rows}x{cols} must have at least one cell")
            }
            Self::TooLarge {
                rows,
                cols,
                max_cells,
            } => write!(f, "grid {rows}x{cols} exceeds the {max_cells}-cell limit"),
            Self::CoordOutOfBounds { x, y, rows, cols } => {
                write!(f, "coordinate ({x}, {y}) out of bounds: [0, {cols}) x [0, {rows})")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
