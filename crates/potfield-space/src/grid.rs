//! Row-major N×M grid of potential vectors.

use std::mem::size_of;

use crate::error::SpaceError;
use potfield_core::{FieldError, Vector2};

/// Largest cell count a single grid allocation can hold.
pub const MAX_CELLS: usize = isize::MAX as usize / size_of::<Vector2>();

/// Validated grid extent: `rows` (N) by `cols` (M), both non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    rows: usize,
    cols: usize,
}

impl GridDims {
    /// Validate signed extents as supplied by a driver.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` unless both are positive and
    /// `Err(SpaceError::TooLarge)` if `rows * cols` exceeds [`MAX_CELLS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use potfield_space::GridDims;
    ///
    /// let dims = GridDims::new(4, 6).unwrap();
    /// assert_eq!(dims.cell_count(), 24);
    /// assert!(GridDims::new(0, 6).is_err());
    /// assert!(GridDims::new(4, -1).is_err());
    /// assert!(GridDims::new(1 << 32, 1 << 32).is_err());
    /// ```
    pub fn new(rows: i64, cols: i64) -> Result<Self, SpaceError> {
        Self::bounded(rows, cols, MAX_CELLS)
    }

    /// Like [`new`](Self::new), with a caller-chosen cell limit.
    ///
    /// `max_cells` is clamped to [`MAX_CELLS`].
    ///
    /// ```
    /// use potfield_space::{GridDims, SpaceError};
    ///
    /// assert!(GridDims::bounded(10, 10, 100).is_ok());
    /// assert_eq!(
    ///     GridDims::bounded(10, 11, 100),
    ///     Err(SpaceError::TooLarge { rows: 10, cols: 11, max_cells: 100 })
    /// );
    /// ```
    pub fn bounded(rows: i64, cols: i64, max_cells: usize) -> Result<Self, SpaceError> {
        if rows <= 0 || cols <= 0 {
            return Err(SpaceError::EmptyGrid { rows, cols });
        }
        let max_cells = max_cells.min(MAX_CELLS);
        let too_large = SpaceError::TooLarge {
            rows,
            cols,
            max_cells,
        };
        let (Ok(r), Ok(c)) = (usize::try_from(rows), usize::try_from(cols)) else {
            return Err(too_large);
        };
        match r.checked_mul(c) {
            Some(n) if n <= max_cells => Ok(Self { rows: r, cols: c }),
            _ => Err(too_large),
        }
    }

    /// Number of rows (N).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (M).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells. Never overflows: construction caps it.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Flat index of `(row, col)` in row-major order.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

/// Check that a signed `(x, y)` pair addresses a cell of `dims`.
///
/// `x` indexes columns and `y` indexes rows. Returns `(row, col)`.
///
/// # Examples
///
/// ```
/// use potfield_space::{check_bounds, GridDims};
///
/// let dims = GridDims::new(2, 3).unwrap();
/// assert_eq!(check_bounds(2, 1, dims).unwrap(), (1, 2));
/// assert!(check_bounds(3, 0, dims).is_err());
/// assert!(check_bounds(0, 2, dims).is_err());
/// ```
pub fn check_bounds(x: i64, y: i64, dims: GridDims) -> Result<(usize, usize), SpaceError> {
    let col = usize::try_from(x).ok().filter(|&c| c < dims.cols);
    let row = usize::try_from(y).ok().filter(|&r| r < dims.rows);
    match (row, col) {
        (Some(row), Some(col)) => Ok((row, col)),
        _ => Err(SpaceError::CoordOutOfBounds {
            x,
            y,
            rows: dims.rows,
            cols: dims.cols,
        }),
    }
}

/// A rectangular table of [`Vector2`] cells.
///
/// Stored as one contiguous buffer addressed by `row * cols + col`.
/// Every cell always holds a valid value; a freshly built or reset grid
/// is all zeros. Accessors do not bounds-check beyond a debug assertion
/// and slice indexing: callers validate coordinates first.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    dims: GridDims,
    cells: Vec<Vector2>,
}

impl Grid {
    /// Allocate a zeroed grid.
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            cells: vec![Vector2::ZERO; dims.cell_count()],
        }
    }

    /// Resize to `dims` if it differs, then zero every cell.
    ///
    /// Reuses the existing allocation when the cell count allows it.
    pub fn reset(&mut self, dims: GridDims) {
        if self.dims != dims {
            self.cells.clear();
            self.cells.resize(dims.cell_count(), Vector2::ZERO);
            self.dims = dims;
        } else {
            self.fill_zero();
        }
    }

    /// Set every cell to `(0, 0)` without changing dimensions.
    pub fn fill_zero(&mut self) {
        self.cells.fill(Vector2::ZERO);
    }

    /// Grid extent.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of rows (N).
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    /// Number of columns (M).
    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Read the cell at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Vector2 {
        debug_assert!(row < self.dims.rows && col < self.dims.cols);
        self.cells[self.dims.index(row, col)]
    }

    /// Overwrite the cell at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: Vector2) {
        debug_assert!(row < self.dims.rows && col < self.dims.cols);
        let i = self.dims.index(row, col);
        self.cells[i] = v;
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[Vector2] {
        &self.cells
    }

    /// Mutable access to all cells in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [Vector2] {
        &mut self.cells
    }

    /// Iterate `((row, col), value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Vector2)> + '_ {
        let cols = self.dims.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / cols, i % cols), *v))
    }
}

impl From<SpaceError> for FieldError {
    fn from(e: SpaceError) -> Self {
        match e {
            SpaceError::EmptyGrid { rows, cols } | SpaceError::TooLarge { rows, cols, .. } => {
                FieldError::InvalidDimensions { rows, cols }
            }
            SpaceError::CoordOutOfBounds { x, y, rows, cols } => {
                FieldError::OutOfBounds { x, y, rows, cols }
            }
        }
    }
}
