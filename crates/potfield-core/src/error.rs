//! Error kinds returned by field engine operations.
//!
//! Every failure is local and recoverable: an operation that returns
//! `Err` has left the engine exactly as it found it.

use std::error::Error;
use std::fmt;

/// Errors from the five field engine operations.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldError {
    /// `configure` was called with a non-positive row or column count.
    InvalidDimensions {
        /// Requested row count (N).
        rows: i64,
        /// Requested column count (M).
        cols: i64,
    },
    /// The operation requires a configured grid and none exists yet.
    NotConfigured,
    /// A coordinate lies outside the active grid.
    OutOfBounds {
        /// Column coordinate supplied by the caller.
        x: i64,
        /// Row coordinate supplied by the caller.
        y: i64,
        /// Row count of the active grid.
        rows: usize,
        /// Column count of the active grid.
        cols: usize,
    },
    /// A source tag was neither `G` nor `O`.
    InvalidKind {
        /// The rejected tag.
        tag: String,
    },
    /// A gain that is not a finite positive number.
    InvalidGain {
        /// The rejected gain.
        value: f64,
    },
}

impl FieldError {
    /// The fieldless kind of this error, for matching without payloads.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDimensions { .. } => ErrorKind::InvalidDimensions,
            Self::NotConfigured => ErrorKind::NotConfigured,
            Self::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::InvalidKind { .. } => ErrorKind::InvalidKind,
            Self::InvalidGain { .. } => ErrorKind::InvalidGain,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {rows}x{cols}: both must be positive")
            }
            Self::NotConfigured => write!(f, "no grid configured"),
            Self::OutOfBounds { x, y, rows, cols } => {
                write!(
                    f,
                    "point ({x}, {y}) out of bounds: x in [0, {cols}), y in [0, {rows})"
                )
            }
            Self::InvalidKind { tag } => {
                write!(f, "invalid source kind {tag:?}: expected 'G' or 'O'")
            }
            Self::InvalidGain { value } => {
                write!(f, "invalid gain {value}: must be finite and > 0")
            }
        }
    }
}

impl Error for FieldError {}

/// Payload-free discriminant of [`FieldError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`FieldError::InvalidDimensions`].
    InvalidDimensions,
    /// See [`FieldError::NotConfigured`].
    NotConfigured,
    /// See [`FieldError::OutOfBounds`].
    OutOfBounds,
    /// See [`FieldError::InvalidKind`].
    InvalidKind,
    /// See [`FieldError::InvalidGain`].
    InvalidGain,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidDimensions => "InvalidDimensions",
            Self::NotConfigured => "NotConfigured",
            Self::OutOfBounds => "OutOfBounds",
            Self::InvalidKind => "InvalidKind",
            Self::InvalidGain => "InvalidGain",
        };
        f.write_str(name)
    }
}
