//! The two-component cell value stored in every grid cell.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg};

/// A potential vector `(px, py)`.
///
/// Pure value type: no identity, freely copied.
///
/// # Examples
///
/// ```
/// use potfield_core::Vector2;
///
/// let mut v = Vector2::ZERO;
/// v += Vector2::splat(-0.5);
/// v += Vector2::new(1.0, 2.0);
/// assert_eq!(v, Vector2::new(0.5, 1.5));
/// assert_eq!(v * 2.0, Vector2::new(1.0, 3.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// X component.
    pub px: f64,
    /// Y component.
    pub py: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { px: 0.0, py: 0.0 };

    /// Construct from components.
    pub const fn new(px: f64, py: f64) -> Self {
        Self { px, py }
    }

    /// A vector with both components equal to `v`.
    pub const fn splat(v: f64) -> Self {
        Self { px: v, py: v }
    }

    /// `true` if both components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.px == 0.0 && self.py == 0.0
    }

    /// `true` if neither component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.px.is_finite() && self.py.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.px + rhs.px, self.py + rhs.py)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.px += rhs.px;
        self.py += rhs.py;
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.px, -self.py)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.px * rhs, self.py * rhs)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.px, self.py)
    }
}
