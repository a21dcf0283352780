//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the plane.
///
/// Generic over floating-point types (`f32` or `f64`). Equality is exact;
/// use [`Point2::coincides`] for tolerance-based matching.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns `true` if `other` lies strictly closer than `eps`.
    #[inline]
    pub fn coincides(self, other: Self, eps: F) -> bool {
        self.distance(other) < eps
    }

    /// Linearly interpolates between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Multiplies both coordinates by `factor`.
    #[inline]
    pub fn scaled(self, factor: F) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<[F; 2]> for Point2<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

/// Anything with a position in the plane.
///
/// Ring predicates and boolean operations accept any `Position`, so graph
/// vertices and bare points can be passed interchangeably. Extra fields such
/// as ids never take part in comparisons.
pub trait Position {
    type Scalar: Float;

    fn position(&self) -> Point2<Self::Scalar>;
}

impl<F: Float> Position for Point2<F> {
    type Scalar = F;

    #[inline]
    fn position(&self) -> Point2<F> {
        *self
    }
}

impl<F: Float> Position for [F; 2] {
    type Scalar = F;

    #[inline]
    fn position(&self) -> Point2<F> {
        Point2::new(self[0], self[1])
    }
}

impl<T: Position + ?Sized> Position for &T {
    type Scalar = T::Scalar;

    #[inline]
    fn position(&self) -> Point2<T::Scalar> {
        (**self).position()
    }
}

/// Euclidean distance between two positions.
#[inline]
pub fn distance_between_points<F: Float>(
    a: impl Position<Scalar = F>,
    b: impl Position<Scalar = F>,
) -> F {
    a.position().distance(b.position())
}
