//! Point sources: goals that attract and obstacles that repel.

use crate::error::FieldError;
use crate::vector::Vector2;
use std::fmt;
use std::str::FromStr;

/// What a point source does to the field around it.
///
/// Textual form is a single tag character: `G` for goals, `O` for
/// obstacles.
///
/// # Examples
///
/// ```
/// use potfield_core::SourceKind;
///
/// assert_eq!("G".parse::<SourceKind>().unwrap(), SourceKind::Goal);
/// assert_eq!(SourceKind::Obstacle.to_string(), "O");
/// assert!("X".parse::<SourceKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Attractive source: lowers potential with proximity.
    Goal,
    /// Repulsive source: raises potential with proximity.
    Obstacle,
}

impl SourceKind {
    /// The single-character tag for this kind.
    pub const fn tag(self) -> char {
        match self {
            Self::Goal => 'G',
            Self::Obstacle => 'O',
        }
    }

    /// Sign applied to the `k / distance` magnitude.
    pub const fn sign(self) -> f64 {
        match self {
            Self::Goal => -1.0,
            Self::Obstacle => 1.0,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for SourceKind {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(FieldError::InvalidKind { tag: s.to_string() }),
        }
    }
}

impl TryFrom<char> for SourceKind {
    type Error = FieldError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'G' => Ok(Self::Goal),
            'O' => Ok(Self::Obstacle),
            other => Err(FieldError::InvalidKind {
                tag: other.to_string(),
            }),
        }
    }
}

/// A registered goal or obstacle at an integer grid location.
///
/// `x` indexes columns and `y` indexes rows. Immutable once created;
/// bounds are validated by the engine at registration time only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointSource {
    x: i64,
    y: i64,
    kind: SourceKind,
}

impl PointSource {
    /// Create a source. Does not validate bounds.
    pub const fn new(kind: SourceKind, x: i64, y: i64) -> Self {
        Self { x, y, kind }
    }

    /// Column coordinate.
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Row coordinate.
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Goal or obstacle.
    pub const fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Contribution of this source to the cell at `(row, col)` under gain `k`.
    ///
    /// Returns `None` when the cell coincides exactly with the source.
    /// Otherwise the magnitude `k / distance` is broadcast to both
    /// components, negated for goals.
    ///
    /// ```
    /// use potfield_core::{PointSource, SourceKind, Vector2};
    ///
    /// let goal = PointSource::new(SourceKind::Goal, 0, 0);
    /// assert_eq!(goal.contribution(0, 1, 1.0), Some(Vector2::splat(-1.0)));
    /// assert_eq!(goal.contribution(0, 0, 1.0), None);
    /// ```
    pub fn contribution(&self, row: i64, col: i64, k: f64) -> Option<Vector2> {
        let dx = (col - self.x) as f64;
        let dy = (row - self.y) as f64;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance == 0.0 {
            return None;
        }
        Some(Vector2::splat(self.kind.sign() * k / distance))
    }
}

impl fmt::Display for PointSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.kind, self.x, self.y)
    }
}
