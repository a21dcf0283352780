//! Axis-aligned bounding box.

use crate::primitives::{Point2, Position};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned bounding box, defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb2<F> {
    pub min: Point2<F>,
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a box from min and max corners without validating them.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates a box from two arbitrary opposite corners.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box containing every position, or `None` for an empty input.
    pub fn from_positions<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Position<Scalar = F>,
    {
        let mut iter = positions.into_iter().map(|p| p.position());
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns `true` if `p` is inside or on the boundary.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if the boxes overlap or touch.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_positions() {
        let pts = [[1.0_f64, 2.0], [3.0, -1.0], [-2.0, 4.0]];
        let bb = Aabb2::from_positions(&pts).unwrap();
        assert_eq!(bb.min, Point2::new(-2.0, -1.0));
        assert_eq!(bb.max, Point2::new(3.0, 4.0));
        assert_eq!(bb.width(), 5.0);
        assert_eq!(bb.height(), 5.0);
        assert_eq!(bb.center(), Point2::new(0.5, 1.5));
    }

    #[test]
    fn test_from_positions_empty() {
        let pts: [Point2<f64>; 0] = [];
        assert!(Aabb2::<f64>::from_positions(&pts).is_none());
    }

    #[test]
    fn test_from_corners_any_order() {
        let bb = Aabb2::from_corners(Point2::new(4.0_f64, 0.0), Point2::new(0.0, 3.0));
        assert_eq!(bb.min, Point2::new(0.0, 0.0));
        assert_eq!(bb.max, Point2::new(4.0, 3.0));
    }

    #[test]
    fn test_contains_boundary() {
        let bb = Aabb2::new(Point2::new(0.0_f64, 0.0), Point2::new(10.0, 10.0));
        assert!(bb.contains_point(Point2::new(10.0, 5.0)));
        assert!(bb.contains_point(Point2::new(5.0, 5.0)));
        assert!(!bb.contains_point(Point2::new(10.1, 5.0)));
    }

    #[test]
    fn test_intersects() {
        let a = Aabb2::new(Point2::new(0.0_f64, 0.0), Point2::new(10.0, 10.0));
        let touching = Aabb2::new(Point2::new(10.0, 0.0), Point2::new(20.0, 10.0));
        let apart = Aabb2::new(Point2::new(11.0, 0.0), Point2::new(20.0, 10.0));
        assert!(a.intersects(touching));
        assert!(!a.intersects(apart));
    }
}
