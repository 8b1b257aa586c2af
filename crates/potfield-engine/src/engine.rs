//! The field engine: lifecycle, source registration, and queries.
//!
//! # Ownership model
//!
//! [`FieldEngine`] exclusively owns its [`Grid`] and point-source list.
//! All mutating methods take `&mut self`; read accessors hand out shared
//! borrows, so no caller can observe a half-finished sweep. Calling
//! [`configure()`](FieldEngine::configure) drops the previous grid and
//! sources before installing new ones.
//!
//! # Failure model
//!
//! Every operation validates all of its inputs before touching state.
//! An `Err` therefore always leaves the engine exactly as it was, and
//! the engine stays usable after any failure.

use potfield_core::{FieldError, PointSource, SourceKind, Vector2};
use potfield_space::{check_bounds, Grid, GridDims};

use crate::config::{ConfigError, EngineConfig};
use crate::metrics::RecomputeMetrics;
use crate::recompute::recompute;

// Compile-time assertion: FieldEngine can be moved between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<FieldEngine>();
    }
};

/// State that only exists while a grid is configured.
#[derive(Clone, Debug)]
struct Configured {
    grid: Grid,
    sources: Vec<PointSource>,
    gain: f64,
}

/// Potential-field engine driven by discrete operations.
///
/// Starts unconfigured. Every operation other than
/// [`configure()`](Self::configure) fails with
/// [`FieldError::NotConfigured`] until a grid exists.
///
/// # Examples
///
/// ```
/// use potfield_core::{SourceKind, Vector2};
/// use potfield_engine::FieldEngine;
///
/// let mut engine = FieldEngine::new();
/// engine.configure(5, 5).unwrap();
/// engine.register_point(SourceKind::Goal, 0, 0).unwrap();
/// assert_eq!(engine.query_at(1, 0).unwrap(), Vector2::splat(-1.0));
///
/// engine.set_gain(3.0).unwrap();
/// assert_eq!(engine.query_at(1, 0).unwrap(), Vector2::splat(-3.0));
/// ```
#[derive(Clone, Debug)]
pub struct FieldEngine {
    config: EngineConfig,
    state: Option<Configured>,
    last_metrics: Option<RecomputeMetrics>,
}

impl FieldEngine {
    /// Create an unconfigured engine with [`EngineConfig::default()`].
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            state: None,
            last_metrics: None,
        }
    }

    /// Create an unconfigured engine from a validated [`EngineConfig`].
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: None,
            last_metrics: None,
        })
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Allocate a fresh zeroed `rows x cols` grid, drop all sources and
    /// reset the gain to the configured default.
    ///
    /// Replaces any prior configuration wholesale.
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidDimensions`] if either extent is not positive
    /// or `rows * cols` exceeds [`EngineConfig::max_cells`]. The previous
    /// configuration, if any, is kept in that case.
    pub fn configure(&mut self, rows: i64, cols: i64) -> Result<(), FieldError> {
        let dims = GridDims::bounded(rows, cols, self.config.max_cells).inspect_err(|e| {
            log::debug!("configure rejected: {e}");
        })?;
        // Drop the old grid before allocating the new one.
        self.state = None;
        self.state = Some(Configured {
            grid: Grid::new(dims),
            sources: Vec::new(),
            gain: self.config.default_gain,
        });
        self.last_metrics = None;
        log::info!(
            "configured {rows}x{cols} grid, gain {}",
            self.config.default_gain
        );
        Ok(())
    }

    /// Remove every source and zero every cell. Dimensions and gain are
    /// kept. Idempotent.
    ///
    /// # Errors
    ///
    /// [`FieldError::NotConfigured`] before the first `configure()`.
    pub fn clear(&mut self) -> Result<(), FieldError> {
        let state = self.state_mut()?;
        let dropped = state.sources.len();
        state.sources.clear();
        state.grid.fill_zero();
        self.last_metrics = None;
        log::info!("cleared {dropped} sources");
        Ok(())
    }

    /// Set the gain `k` and recompute the whole grid.
    ///
    /// # Errors
    ///
    /// [`FieldError::NotConfigured`] before the first `configure()`;
    /// [`FieldError::InvalidGain`] if `k` is not finite and positive.
    pub fn set_gain(&mut self, k: f64) -> Result<(), FieldError> {
        self.state_ref()?;
        if !k.is_finite() || k <= 0.0 {
            log::debug!("set_gain rejected: {k}");
            return Err(FieldError::InvalidGain { value: k });
        }
        let state = self.state_mut()?;
        state.gain = k;
        log::debug!("gain set to {k}");
        self.recompute_all();
        Ok(())
    }

    // ── Registration ─────────────────────────────────────────────

    /// Append a source at column `x`, row `y` and recompute.
    ///
    /// Duplicate locations are allowed and contribute independently.
    ///
    /// # Errors
    ///
    /// [`FieldError::NotConfigured`] before the first `configure()`;
    /// [`FieldError::OutOfBounds`] unless `0 <= x < cols` and
    /// `0 <= y < rows`.
    pub fn register_point(&mut self, kind: SourceKind, x: i64, y: i64) -> Result<(), FieldError> {
        self.validate_point(x, y)?;
        self.push_source(PointSource::new(kind, x, y));
        Ok(())
    }

    /// Like [`register_point`](Self::register_point), but takes the raw
    /// textual kind tag (`G` or `O`).
    ///
    /// Checks run in the order configured, bounds, kind.
    ///
    /// # Errors
    ///
    /// As `register_point`, plus [`FieldError::InvalidKind`] for any other
    /// tag.
    pub fn register_tagged(&mut self, tag: &str, x: i64, y: i64) -> Result<(), FieldError> {
        self.validate_point(x, y)?;
        let kind = tag.parse::<SourceKind>().inspect_err(|e| {
            log::debug!("register rejected: {e}");
        })?;
        self.push_source(PointSource::new(kind, x, y));
        Ok(())
    }

    // ── Query ────────────────────────────────────────────────────

    /// Read the potential at column `x`, row `y`.
    ///
    /// Returns the last computed value; never recomputes.
    ///
    /// # Errors
    ///
    /// [`FieldError::NotConfigured`] before the first `configure()`;
    /// [`FieldError::OutOfBounds`] for coordinates outside the grid.
    pub fn query_at(&self, x: i64, y: i64) -> Result<Vector2, FieldError> {
        let state = self.state_ref()?;
        let (row, col) = check_bounds(x, y, state.grid.dims())?;
        Ok(state.grid.get(row, col))
    }

    // ── Accessors ────────────────────────────────────────────────

    /// Whether a grid currently exists.
    pub fn is_configured(&self) -> bool {
        self.state.is_some()
    }

    /// Active grid dimensions.
    pub fn dims(&self) -> Option<GridDims> {
        self.state.as_ref().map(|s| s.grid.dims())
    }

    /// Active gain `k`.
    pub fn gain(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.gain)
    }

    /// Registered sources in insertion order. Empty when unconfigured.
    pub fn sources(&self) -> &[PointSource] {
        match &self.state {
            Some(state) => &state.sources,
            None => &[],
        }
    }

    /// The active grid.
    pub fn grid(&self) -> Option<&Grid> {
        self.state.as_ref().map(|s| &s.grid)
    }

    /// Metrics from the most recent recomputation since the last
    /// `configure()`.
    pub fn last_metrics(&self) -> Option<&RecomputeMetrics> {
        self.last_metrics.as_ref()
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ── Internals ────────────────────────────────────────────────

    fn state_ref(&self) -> Result<&Configured, FieldError> {
        self.state.as_ref().ok_or(FieldError::NotConfigured)
    }

    fn state_mut(&mut self) -> Result<&mut Configured, FieldError> {
        self.state.as_mut().ok_or(FieldError::NotConfigured)
    }

    fn validate_point(&self, x: i64, y: i64) -> Result<(), FieldError> {
        let state = self.state_ref()?;
        check_bounds(x, y, state.grid.dims()).map_err(|e| {
            log::debug!("register rejected: {e}");
            FieldError::from(e)
        })?;
        Ok(())
    }

    fn push_source(&mut self, source: PointSource) {
        if let Some(state) = self.state.as_mut() {
            state.sources.push(source);
            log::debug!(
                "registered {source}, {} sources total",
                state.sources.len()
            );
        }
        self.recompute_all();
    }

    fn recompute_all(&mut self) {
        if let Some(state) = self.state.as_mut() {
            let metrics = recompute(&mut state.grid, &state.sources, state.gain);
            log::debug!(
                "recomputed {} pairs ({} cells x {} sources) in {}us, {} coincident",
                metrics.pair_count(),
                metrics.cells,
                metrics.sources,
                metrics.elapsed_us,
                metrics.coincident_skips
            );
            self.last_metrics = Some(metrics);
        }
    }
}

impl Default for FieldEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use potfield_core::ErrorKind;

    fn configured(rows: i64, cols: i64) -> FieldEngine {
        let mut e = FieldEngine::new();
        e.configure(rows, cols).unwrap();
        e
    }

    #[test]
    fn fresh_engine_is_unconfigured() {
        let e = FieldEngine::new();
        assert!(!e.is_configured());
        assert!(e.dims().is_none());
        assert!(e.gain().is_none());
        assert!(e.sources().is_empty());
        assert!(e.grid().is_none());
        assert!(e.last_metrics().is_none());
    }

    #[test]
    fn configure_sets_unit_gain_and_zero_grid() {
        let e = configured(5, 5);
        assert_eq!(e.gain(), Some(1.0));
        assert_eq!(e.dims(), Some(GridDims::new(5, 5).unwrap()));
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(e.query_at(x, y).unwrap(), Vector2::ZERO);
            }
        }
    }

    #[test]
    fn configure_rejects_bad_dims_and_keeps_state() {
        let mut e = configured(3, 3);
        e.register_point(SourceKind::Goal, 1, 1).unwrap();
        let err = e.configure(0, 4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDimensions);
        assert_eq!(e.sources().len(), 1);
        assert_eq!(e.dims(), Some(GridDims::new(3, 3).unwrap()));

        let mut fresh = FieldEngine::new();
        assert_eq!(
            fresh.configure(-2, 2),
            Err(FieldError::InvalidDimensions { rows: -2, cols: 2 })
        );
        assert!(!fresh.is_configured());
    }

    #[test]
    fn configure_rejects_oversized_grids() {
        let mut e = configured(2, 3);
        e.register_point(SourceKind::Obstacle, 0, 0).unwrap();
        for (rows, cols) in [(1 << 32, 1 << 32), (i64::MAX, i64::MAX), (1, 1 << 40)] {
            assert_eq!(
                e.configure(rows, cols),
                Err(FieldError::InvalidDimensions { rows, cols })
            );
        }
        assert_eq!(e.dims(), Some(GridDims::new(2, 3).unwrap()));
        assert_eq!(e.sources().len(), 1);
        assert_eq!(e.query_at(0, 1).unwrap(), Vector2::splat(1.0));
    }

    #[test]
    fn configure_honours_max_cells() {
        let mut e = FieldEngine::with_config(EngineConfig {
            max_cells: 12,
            ..EngineConfig::default()
        })
        .unwrap();
        e.configure(3, 4).unwrap();
        assert_eq!(
            e.configure(4, 4),
            Err(FieldError::InvalidDimensions { rows: 4, cols: 4 })
        );
        assert_eq!(e.dims(), Some(GridDims::new(3, 4).unwrap()));
    }

    #[test]
    fn custom_default_gain_applies_on_configure() {
        let mut e = FieldEngine::with_config(EngineConfig {
            default_gain: 2.5,
            ..EngineConfig::default()
        }).unwrap();
        e.configure(2, 2).unwrap();
        assert_eq!(e.gain(), Some(2.5));
        e.set_gain(4.0).unwrap();
        e.configure(2, 2).unwrap();
        assert_eq!(e.gain(), Some(2.5));
    }

    #[test]
    fn with_config_rejects_invalid() {
        let err = FieldEngine::with_config(EngineConfig {
            default_gain: 0.0,
            ..EngineConfig::default()
        }).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDefaultGain { value: 0.0 });
    }

    #[test]
    fn rows_and_columns_are_not_swapped() {
        // 2 rows, 4 columns: x may reach 3, y only 1.
        let mut e = configured(2, 4);
        assert!(e.register_point(SourceKind::Goal, 3, 1).is_ok());
        assert_eq!(
            e.register_point(SourceKind::Goal, 1, 3).unwrap_err().kind(),
            ErrorKind::OutOfBounds
        );
        assert!(e.query_at(3, 1).is_ok());
        assert_eq!(e.query_at(1, 3).unwrap_err().kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn tagged_registration_checks_kind_last() {
        let mut e = FieldEngine::new();
        assert_eq!(e.register_tagged("X", 0, 0), Err(FieldError::NotConfigured));

        e.configure(2, 2).unwrap();
        assert_eq!(
            e.register_tagged("X", 5, 5).unwrap_err().kind(),
            ErrorKind::OutOfBounds
        );
        assert_eq!(
            e.register_tagged("X", 1, 1),
            Err(FieldError::InvalidKind {
                tag: "X".to_string()
            })
        );
        assert!(e.sources().is_empty());

        e.register_tagged("O", 1, 1).unwrap();
        assert_eq!(e.sources()[0].kind(), SourceKind::Obstacle);
    }

    #[test]
    fn set_gain_validation_order() {
        let mut e = FieldEngine::new();
        assert_eq!(e.set_gain(-1.0), Err(FieldError::NotConfigured));
        e.configure(2, 2).unwrap();
        for bad in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            assert_eq!(e.set_gain(bad).unwrap_err().kind(), ErrorKind::InvalidGain);
        }
        assert_eq!(e.gain(), Some(1.0));
    }

    #[test]
    fn clear_keeps_dims_and_gain() {
        let mut e = configured(3, 4);
        e.set_gain(2.0).unwrap();
        e.register_point(SourceKind::Obstacle, 0, 0).unwrap();
        e.clear().unwrap();
        assert!(e.sources().is_empty());
        assert_eq!(e.gain(), Some(2.0));
        assert_eq!(e.dims(), Some(GridDims::new(3, 4).unwrap()));
        assert!(e.grid().unwrap().as_slice().iter().all(Vector2::is_zero));
    }

    #[test]
    fn clear_drops_stale_metrics() {
        let mut e = configured(3, 3);
        e.register_point(SourceKind::Goal, 1, 1).unwrap();
        assert_eq!(e.last_metrics().unwrap().sources, 1);
        e.clear().unwrap();
        assert!(e.last_metrics().is_none());
        e.register_point(SourceKind::Goal, 0, 0).unwrap();
        assert_eq!(e.last_metrics().unwrap().sources, 1);
        assert_eq!(e.last_metrics().unwrap().pair_count(), 9);
    }

    #[test]
    fn metrics_track_last_sweep() {
        let mut e = configured(3, 3);
        assert!(e.last_metrics().is_none());
        e.register_point(SourceKind::Goal, 1, 1).unwrap();
        e.register_point(SourceKind::Goal, 2, 2).unwrap();
        let m = e.last_metrics().unwrap();
        assert_eq!(m.cells, 9);
        assert_eq!(m.sources, 2);
        assert_eq!(m.coincident_skips, 2);

        e.configure(3, 3).unwrap();
        assert!(e.last_metrics().is_none());
    }
}
