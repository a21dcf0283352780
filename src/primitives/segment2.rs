//! 2D line segment type, projections and directions.

use super::{cast, Point2, Position, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

/// Distance from a point to a segment together with the closest point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDistance<F> {
    pub distance: F,
    /// The clamped projection of the query point onto the segment.
    pub projection: Point2<F>,
}

impl<F: Float> Segment2<F> {
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from any two positions, e.g. a pair of vertices.
    #[inline]
    pub fn between(start: impl Position<Scalar = F>, end: impl Position<Scalar = F>) -> Self {
        Self::new(start.position(), end.position())
    }

    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Orthogonal projection of `p`, clamped to the segment.
    ///
    /// A zero-length segment divides by 2 instead of 0; the dot product is
    /// then zero and the start point comes back.
    pub fn project(self, p: Point2<F>) -> Point2<F> {
        let d = self.direction();
        let mut len_sq = d.magnitude_squared();
        if len_sq == F::zero() {
            len_sq = F::one() + F::one();
        }

        let t = (p - self.start).dot(d) / len_sq;
        if t <= F::zero() {
            self.start
        } else if t > F::one() {
            self.end
        } else {
            self.point_at(t)
        }
    }

    /// Distance from `p` to its clamped projection onto the segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> SegmentDistance<F> {
        let projection = self.project(p);
        SegmentDistance {
            distance: p.distance(projection),
            projection,
        }
    }

    /// Angle of the segment from the positive x-axis, in `(-π/2, π/2]`.
    ///
    /// Uses `atan(dy / dx)`, so a segment and its reverse share a direction.
    pub fn direction_angle(self) -> F {
        let d = self.direction();
        if d.x == F::zero() {
            return cast(std::f64::consts::FRAC_PI_2);
        }
        (d.y / d.x).atan()
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

/// Orthogonal projection of `point` onto `segment`, clamped to its endpoints.
#[inline]
pub fn projection_of_point_to_line<F: Float>(point: Point2<F>, segment: Segment2<F>) -> Point2<F> {
    segment.project(point)
}

/// Distance from `point` to `segment`, plus the projection it was measured to.
#[inline]
pub fn point_distance_to_segment<F: Float>(
    point: Point2<F>,
    segment: Segment2<F>,
) -> SegmentDistance<F> {
    segment.distance_to_point(point)
}

/// Direction of an edge in radians, see [`Segment2::direction_angle`].
#[inline]
pub fn edge_direction<F: Float>(edge: Segment2<F>) -> F {
    edge.direction_angle()
}
