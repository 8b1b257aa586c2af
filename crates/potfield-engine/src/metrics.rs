//! Per-sweep metrics for the recompute pass.

/// Size and timing of a single full-grid recomputation.
///
/// The engine replaces its stored copy after every sweep; read it with
/// [`FieldEngine::last_metrics`](crate::FieldEngine::last_metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecomputeMetrics {
    /// Number of cells written.
    pub cells: usize,
    /// Number of registered sources summed per cell.
    pub sources: usize,
    /// Source/cell pairs skipped because they coincide.
    pub coincident_skips: u64,
    /// Wall-clock time for the sweep, in microseconds.
    pub elapsed_us: u64,
}

impl RecomputeMetrics {
    /// Number of source/cell pairs visited: `cells * sources`.
    pub fn pair_count(&self) -> u64 {
        self.cells as u64 * self.sources as u64
    }
}
