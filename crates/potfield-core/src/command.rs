//! Decoded driver commands and the replies the engine produces for them.

use crate::error::FieldError;
use crate::vector::Vector2;

/// A single decoded command.
///
/// Each variant maps onto exactly one field engine operation, except
/// [`Exit`](Command::Exit) which ends a session.
///
/// # Examples
///
/// ```
/// use potfield_core::Command;
///
/// let cmd = Command::Point {
///     tag: "G".to_string(),
///     x: 2,
///     y: 3,
/// };
/// assert_eq!(cmd.name(), "POINT");
/// assert!(cmd.is_mutating());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Allocate a fresh `rows x cols` grid, discarding all sources.
    Create {
        /// Row count (N).
        rows: i64,
        /// Column count (M).
        cols: i64,
    },
    /// Register a source. The tag is kept raw so that an unknown tag is
    /// reported by the engine after configuration and bounds checks.
    Point {
        /// Raw kind tag (`G` or `O` when valid).
        tag: String,
        /// Column coordinate.
        x: i64,
        /// Row coordinate.
        y: i64,
    },
    /// Query the potential at a cell.
    Move {
        /// Column coordinate.
        x: i64,
        /// Row coordinate.
        y: i64,
    },
    /// Remove all sources and zero the grid.
    Clear,
    /// Set the gain constant and recompute.
    Update {
        /// New gain.
        gain: f64,
    },
    /// End the session.
    Exit,
}

impl Command {
    /// Protocol keyword for this command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "CREATE",
            Self::Point { .. } => "POINT",
            Self::Move { .. } => "MOVE",
            Self::Clear => "CLEAR",
            Self::Update { .. } => "UPDATE",
            Self::Exit => "EXIT",
        }
    }

    /// `true` for commands that may change engine state.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::Move { .. } | Self::Exit)
    }
}

/// Outcome of applying a [`Command`].
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    /// The operation succeeded and produced no value.
    Success,
    /// The operation failed; engine state is unchanged.
    Failure(FieldError),
    /// A query succeeded.
    Value(Vector2),
    /// The session should stop reading commands.
    Exit,
}

impl Reply {
    /// `true` for [`Success`](Reply::Success) and [`Value`](Reply::Value).
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success | Self::Value(_))
    }
}

impl From<Result<(), FieldError>> for Reply {
    fn from(r: Result<(), FieldError>) -> Self {
        match r {
            Ok(()) => Self::Success,
            Err(e) => Self::Failure(e),
        }
    }
}

impl From<Result<Vector2, FieldError>> for Reply {
    fn from(r: Result<Vector2, FieldError>) -> Self {
        match r {
            Ok(v) => Self::Value(v),
            Err(e) => Self::Failure(e),
        }
    }
}
