//! Full-grid potential recomputation.
//!
//! Every cell is rebuilt from zero on each call:
//!
//! ```text
//! for each cell (row=i, col=j):
//!   cell = (0, 0)
//!   for each source s (insertion order):
//!     d = sqrt((j - s.x)² + (i - s.y)²)
//!     if d == 0: skip
//!     cell += sign(s.kind) * (k / d, k / d)
//! ```
//!
//! Goals have sign -1, obstacles +1. There is no caching between calls.

use crate::metrics::RecomputeMetrics;
use potfield_core::{PointSource, Vector2};
use potfield_space::Grid;
use std::time::Instant;

/// Overwrite every cell of `grid` with the superposition of `sources`
/// under gain `k`.
///
/// # Examples
///
/// ```
/// use potfield_core::{PointSource, SourceKind, Vector2};
/// use potfield_engine::recompute::recompute;
/// use potfield_space::{Grid, GridDims};
///
/// let mut grid = Grid::new(GridDims::new(1, 3).unwrap());
/// let sources = [PointSource::new(SourceKind::Goal, 0, 0)];
/// let metrics = recompute(&mut grid, &sources, 2.0);
///
/// assert_eq!(grid.get(0, 0), Vector2::ZERO);
/// assert_eq!(grid.get(0, 1), Vector2::splat(-2.0));
/// assert_eq!(grid.get(0, 2), Vector2::splat(-1.0));
/// assert_eq!(metrics.coincident_skips, 1);
/// ```
pub fn recompute(grid: &mut Grid, sources: &[PointSource], k: f64) -> RecomputeMetrics {
    let start = Instant::now();
    let cols = grid.cols();
    let mut coincident_skips = 0u64;

    for (idx, cell) in grid.as_mut_slice().iter_mut().enumerate() {
        let row = (idx / cols) as i64;
        let col = (idx % cols) as i64;
        let mut acc = Vector2::ZERO;
        for source in sources {
            match source.contribution(row, col, k) {
                Some(v) => acc += v,
                None => coincident_skips += 1,
            }
        }
        *cell = acc;
    }

    RecomputeMetrics {
        cells: grid.cell_count(),
        sources: sources.len(),
        coincident_skips,
        elapsed_us: start.elapsed().as_micros() as u64,
    }
}
