//! 2D vector type and unit-direction helpers.

use super::Point2;
use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D vector representing a direction or offset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Z-component of the 3D cross product. Positive when `other` is
    /// counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns the unit vector in the same direction, or `None` for a zero vector.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::zero() {
            Some(self / mag)
        } else {
            None
        }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Normalizes `(dx, dy)` to unit length.
///
/// Returns `None` when both components are zero.
///
/// # Example
///
/// ```
/// use plangraph::primitives::unit_vector;
///
/// let u = unit_vector(3.0_f64, 4.0).unwrap();
/// assert!((u.x - 0.6).abs() < 1e-12);
/// assert!((u.y - 0.8).abs() < 1e-12);
/// ```
#[inline]
pub fn unit_vector<F: Float>(dx: F, dy: F) -> Option<Vec2<F>> {
    Vec2::new(dx, dy).normalize()
}

/// Returns a unit vector perpendicular to the segment `p1 → p2`.
///
/// The perpendicular is taken from the negative reciprocal slope, so the
/// result always points toward non-negative x. A vertical segment yields
/// `(1, 0)` and a horizontal one `(0, 1)`. When both points coincide there is
/// no direction to be perpendicular to, and `(1, 1)` normalized is returned.
pub fn unit_perp_vector<F: Float>(p1: Point2<F>, p2: Point2<F>) -> Vec2<F> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let zero = F::zero();
    let one = F::one();

    if dx == zero && dy == zero {
        let c = (one + one).sqrt().recip();
        return Vec2::new(c, c);
    }
    if dx == zero {
        return Vec2::new(one, zero);
    }
    if dy == zero {
        return Vec2::new(zero, one);
    }

    let perp_slope = -dx / dy;
    let len = (one + perp_slope * perp_slope).sqrt();
    Vec2::new(one / len, perp_slope / len)
}
