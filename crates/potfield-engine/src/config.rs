//! Engine configuration, validation, and error types.

use std::error::Error;
use std::fmt;

// ── EngineConfig ───────────────────────────────────────────────────

/// Default cap on `rows * cols` (64 Mi cells, 1 GiB of grid).
pub const DEFAULT_MAX_CELLS: usize = 1 << 26;

/// Construction-time settings for a [`FieldEngine`](crate::FieldEngine).
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Gain `k` installed by every `configure()` call. Default: 1.0.
    pub default_gain: f64,
    /// Largest grid `configure()` will allocate, in cells. Larger
    /// requests fail with `InvalidDimensions`. Default: [`DEFAULT_MAX_CELLS`].
    pub max_cells: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_gain: 1.0,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl EngineConfig {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDefaultGain`] if `default_gain` is
    /// NaN, infinite, zero, or negative, and
    /// [`ConfigError::InvalidMaxCells`] if `max_cells` is zero or above
    /// [`MAX_CELLS`](potfield_space::MAX_CELLS).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_gain.is_finite() || self.default_gain <= 0.0 {
            return Err(ConfigError::InvalidDefaultGain {
                value: self.default_gain,
            });
        }
        if self.max_cells == 0 || self.max_cells > potfield_space::MAX_CELLS {
            return Err(ConfigError::InvalidMaxCells {
                value: self.max_cells,
            });
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// `default_gain` is not a finite positive number.
    InvalidDefaultGain {
        /// The invalid value.
        value: f64,
    },
    /// `max_cells` is zero or larger than one allocation can hold.
    InvalidMaxCells {
        /// The invalid value.
        value: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDefaultGain { value } => {
                write!(f, "default_gain must be finite and > 0, got {value}")
            }
            Self::InvalidMaxCells { value } => write!(
                f,
                "max_cells must be in 1..={}, got {value}",
                potfield_space::MAX_CELLS
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.default_gain, 1.0);
        assert_eq!(cfg.max_cells, DEFAULT_MAX_CELLS);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_gain() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let cfg = EngineConfig {
                default_gain: value,
                ..EngineConfig::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidDefaultGain { .. })),
                "default_gain {value} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_bad_max_cells() {
        for value in [0, potfield_space::MAX_CELLS + 1, usize::MAX] {
            let cfg = EngineConfig {
                max_cells: value,
                ..EngineConfig::default()
            };
            assert_eq!(cfg.validate(), Err(ConfigError::InvalidMaxCells { value }));
        }
        let cfg = EngineConfig {
            max_cells: potfield_space::MAX_CELLS,
            ..EngineConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn error_display() {
        let err = ConfigError::InvalidDefaultGain { value: -2.0 };
        assert_eq!(err.to_string(), "default_gain must be finite and > 0, got -2");
    }
}
