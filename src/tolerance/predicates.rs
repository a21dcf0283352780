//! Geometric predicates with explicit tolerance.

use super::{INTERSECTION_EPSILON, SIMILAR_ANGLE_FRACTION, VERTEX_EPSILON};
use crate::primitives::{cast, Point2, Segment2};
use num_traits::Float;

/// Tests whether three points are collinear within [`VERTEX_EPSILON`].
///
/// With `p1 = (a, b)`, `p2 = (m, n)` and `p3 = (x, y)` the test is
/// `|(n - b)(x - m) - (y - n)(m - a)| < 1e-5`. The expression is twice the
/// signed triangle area, so the tolerance is an area, not a distance.
///
/// # Example
///
/// ```
/// use plangraph::tolerance::pts_are_collinear;
/// use plangraph::Point2;
///
/// assert!(pts_are_collinear(
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(5.0, 5.0),
/// ));
/// ```
#[inline]
pub fn pts_are_collinear<F: Float>(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> bool {
    let (a, b) = (p1.x, p1.y);
    let (m, n) = (p2.x, p2.y);
    let (x, y) = (p3.x, p3.y);
    ((n - b) * (x - m) - (y - n) * (m - a)).abs() < cast(VERTEX_EPSILON)
}

/// Tests whether two points are the same vertex by value.
#[inline]
pub fn points_coincide<F: Float>(a: Point2<F>, b: Point2<F>) -> bool {
    a.coincides(b, cast(VERTEX_EPSILON))
}

/// Tests whether two edges run in roughly the same direction.
///
/// Directions come from [`Segment2::direction_angle`], so traversal order does
/// not matter. Angles that differ by close to π (a near-vertical pair straddling
/// ±π/2) are also treated as similar. The threshold is
/// [`SIMILAR_ANGLE_FRACTION`]·π, about 9°.
pub fn have_similar_angles<F: Float>(e1: Segment2<F>, e2: Segment2<F>) -> bool {
    let pi: F = cast(std::f64::consts::PI);
    let delta = (e1.direction_angle() - e2.direction_angle()).abs();
    delta.min(pi - delta) < pi * cast(SIMILAR_ANGLE_FRACTION)
}

/// Intersection point of the segments `p1–p2` and `p3–p4`.
///
/// The lines are intersected with the determinant formula. The result is
/// rejected (`None`) when:
///
/// - the lines are parallel, which makes the division non-finite,
/// - the point is within [`INTERSECTION_EPSILON`] of any of the four inputs,
///   so segments that merely share an endpoint do not count,
/// - the point falls outside either segment's bounding interval on x or y.
///
/// # Example
///
/// ```
/// use plangraph::tolerance::intersection_of_lines;
/// use plangraph::Point2;
///
/// let hit = intersection_of_lines(
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
///     Point2::new(10.0, 0.0),
/// );
/// assert_eq!(hit, Some(Point2::new(5.0, 5.0)));
/// ```
pub fn intersection_of_lines<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    p4: Point2<F>,
) -> Option<Point2<F>> {
    let (x1, y1, x2, y2) = (p1.x, p1.y, p2.x, p2.y);
    let (x3, y3, x4, y4) = (p3.x, p3.y, p4.x, p4.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    let a = x1 * y2 - y1 * x2;
    let b = x3 * y4 - y3 * x4;
    let px = (a * (x3 - x4) - (x1 - x2) * b) / denom;
    let py = (a * (y3 - y4) - (y1 - y2) * b) / denom;

    if !px.is_finite() || !py.is_finite() {
        return None;
    }

    let eps: F = cast(INTERSECTION_EPSILON);
    let hit = Point2::new(px, py);
    if [p1, p2, p3, p4]
        .iter()
        .any(|p| (p.x - hit.x).abs() < eps && (p.y - hit.y).abs() < eps)
    {
        return None;
    }

    let within = |v: F, lo: F, hi: F| v >= lo.min(hi) - eps && v <= lo.max(hi) + eps;
    if within(px, x1, x2) && within(py, y1, y2) && within(px, x3, x4) && within(py, y3, y4) {
        Some(hit)
    } else {
        None
    }
}
