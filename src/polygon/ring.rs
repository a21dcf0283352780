//! Ring predicates: equality up to rotation, point-in-ring, area.
//!
//! A ring is an ordered slice of positions. It may be given open (`n`
//! distinct vertices) or self-closing (first == last); every function here
//! opens it first.

use super::bridge::to_geo_polygon;
use crate::bounds::Aabb2;
use crate::primitives::{Point2, Position};
use crate::tolerance::pts_are_collinear;
use geo::Area;

/// Drops the duplicated final vertex of a self-closing ring.
///
/// Rings of three or fewer vertices are returned unchanged.
///
/// # Example
///
/// ```
/// use plangraph::polygon::drop_closing_vertex;
///
/// let closed = [[0.0_f64, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]];
/// assert_eq!(drop_closing_vertex(&closed).len(), 3);
/// ```
pub fn drop_closing_vertex<P: Position>(ring: &[P]) -> &[P] {
    match ring {
        [first, .., last] if ring.len() > 3 && first.position() == last.position() => {
            &ring[..ring.len() - 1]
        }
        _ => ring,
    }
}

/// Tests whether two rings trace the same polygon.
///
/// True when `ws` is a rotation of `vs` in either winding direction. Only
/// positions are compared, exactly; ids and other fields are ignored.
///
/// # Example
///
/// ```
/// use plangraph::polygon::ring_equals;
///
/// let a = [[0.0_f64, 0.0], [1.0, 0.0], [1.0, 1.0]];
/// let b = [[1.0_f64, 1.0], [1.0, 0.0], [0.0, 0.0]];
/// assert!(ring_equals(&a, &b));
/// ```
pub fn ring_equals<P, Q>(vs: &[P], ws: &[Q]) -> bool
where
    P: Position,
    Q: Position<Scalar = P::Scalar>,
{
    let vs = drop_closing_vertex(vs);
    let ws = drop_closing_vertex(ws);
    if vs.len() != ws.len() {
        return false;
    }
    let Some(first) = vs.first() else {
        return true;
    };

    let first = first.position();
    let Some(pivot) = ws.iter().position(|w| w.position() == first) else {
        return false;
    };

    let n = ws.len();
    let aligned = |step: fn(usize, usize, usize) -> usize| {
        vs.iter()
            .enumerate()
            .all(|(k, v)| v.position() == ws[step(pivot, k, n)].position())
    };
    aligned(|pivot, k, n| (pivot + k) % n) || aligned(|pivot, k, n| (pivot + n - k) % n)
}

/// Even-odd point-in-ring test.
///
/// A point on an edge, meaning collinear with it and inside the edge's
/// bounding box, returns `!ignore_boundary` without further testing.
pub fn in_ring<P: Position>(pt: Point2<P::Scalar>, ring: &[P], ignore_boundary: bool) -> bool {
    let ring = drop_closing_vertex(ring);
    let n = ring.len();
    if n == 0 {
        return false;
    }

    let mut is_inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = ring[i].position();
        let b = ring[j].position();

        if pts_are_collinear(a, b, pt) && Aabb2::from_corners(a, b).contains_point(pt) {
            return !ignore_boundary;
        }

        if (a.y > pt.y) != (b.y > pt.y) && pt.x < (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x {
            is_inside = !is_inside;
        }
        j = i;
    }
    is_inside
}

/// [`in_ring`] for a position, counting the boundary as inside.
#[inline]
pub fn vert_in_ring<V, P>(vertex: &V, ring: &[P]) -> bool
where
    V: Position + ?Sized,
    P: Position<Scalar = V::Scalar>,
{
    in_ring(vertex.position(), ring, false)
}

/// Point-in-polygon for a polygon with holes.
///
/// `rings[0]` is the outer boundary and any further rings are holes. The
/// point must be in the outer ring and in none of the holes. Holes are tested
/// with `ignore_boundary` inverted, so a point on a hole's edge is outside
/// exactly when a point on the outer edge is inside.
///
/// # Example
///
/// ```
/// use plangraph::polygon::inside;
/// use plangraph::Point2;
///
/// let outer = vec![[0.0_f64, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]];
/// let hole = vec![[2.0_f64, 2.0], [8.0, 2.0], [8.0, 8.0], [2.0, 8.0]];
/// let p = Point2::new(5.0, 5.0);
///
/// assert!(inside(p, &[outer.clone()], false));
/// assert!(!inside(p, &[outer, hole], false));
/// ```
pub fn inside<P, R>(pt: Point2<P::Scalar>, rings: &[R], ignore_boundary: bool) -> bool
where
    P: Position,
    R: AsRef<[P]>,
{
    let Some((outer, holes)) = rings.split_first() else {
        return false;
    };
    let outer = outer.as_ref();

    match bbox_of_ring(outer) {
        Some(bb) if bb.contains_point(pt) => {}
        _ => return false,
    }

    in_ring(pt, outer, ignore_boundary)
        && !holes
            .iter()
            .any(|hole| in_ring(pt, hole.as_ref(), !ignore_boundary))
}

/// Bounding box of a ring, `None` when it is empty.
pub fn bbox_of_ring<P: Position>(ring: &[P]) -> Option<Aabb2<P::Scalar>> {
    Aabb2::from_positions(ring)
}

/// Absolute area enclosed by a ring.
///
/// Self-intersecting rings may report zero.
pub fn area_of_selection<P: Position<Scalar = f64>>(ring: &[P]) -> f64 {
    to_geo_polygon(ring).unsigned_area()
}

/// Signed area of a ring, positive when it winds counter-clockwise.
pub fn signed_area_of_ring<P: Position<Scalar = f64>>(ring: &[P]) -> f64 {
    to_geo_polygon(ring).signed_area()
}

/// Tests whether a clipping result describes a polygon with a hole.
///
/// True when there are at least two rings and the first point of ring 1 lies
/// strictly inside ring 0.
pub fn clipper_polygon_has_holes<P, R>(rings: &[R]) -> bool
where
    P: Position,
    R: AsRef<[P]>,
{
    match rings {
        [outer, second, ..] => second
            .as_ref()
            .first()
            .is_some_and(|p| in_ring(p.position(), outer.as_ref(), true)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(min: f64, max: f64) -> Vec<Point2<f64>> {
        vec![
            Point2::new(min, min),
            Point2::new(max, min),
            Point2::new(max, max),
            Point2::new(min, max),
        ]
    }

    #[test]
    fn test_drop_closing_vertex() {
        let mut ring = square(0.0, 1.0);
        assert_eq!(drop_closing_vertex(&ring).len(), 4);
        ring.push(ring[0]);
        assert_eq!(drop_closing_vertex(&ring).len(), 4);

        // too short to be a closed ring
        let tiny = [[0.0_f64, 0.0], [1.0, 0.0], [0.0, 0.0]];
        assert_eq!(drop_closing_vertex(&tiny).len(), 3);
    }

    #[test]
    fn test_ring_equals_rotations_and_reversal() {
        let ring = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(5.0, 3.0),
            Point2::new(1.0, 4.0),
        ];
        for k in 0..ring.len() {
            let mut rotated = ring.clone();
            rotated.rotate_left(k);
            assert!(ring_equals(&ring, &rotated), "rotation {k}");

            rotated.reverse();
            assert!(ring_equals(&ring, &rotated), "reversed rotation {k}");
        }

        let mut closed = ring.clone();
        closed.push(ring[0]);
        assert!(ring_equals(&closed, &ring));
    }

    #[test]
    fn test_ring_equals_rejects_differences() {
        let ring = square(0.0, 2.0);

        let mut moved = ring.clone();
        moved[2] = Point2::new(2.0, 2.000001);
        assert!(!ring_equals(&ring, &moved));

        assert!(!ring_equals(&ring, &ring[..3]));

        // same vertex set, different order
        let shuffled = vec![ring[0], ring[2], ring[1], ring[3]];
        assert!(!ring_equals(&ring, &shuffled));
    }

    #[test]
    fn test_ring_equals_mixed_position_types() {
        let points = square(0.0, 1.0);
        let arrays = [[1.0_f64, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0]];
        assert!(ring_equals(&points, &arrays));
    }

    #[test]
    fn test_in_ring() {
        let ring = square(0.0, 10.0);
        assert!(in_ring(Point2::new(5.0, 5.0), &ring, false));
        assert!(!in_ring(Point2::new(15.0, 5.0), &ring, false));
        assert!(!in_ring(Point2::new(-0.1, 5.0), &ring, true));
    }

    #[test]
    fn test_in_ring_boundary() {
        let ring = square(0.0, 10.0);
        let on_edge = Point2::new(10.0, 4.0);
        assert!(in_ring(on_edge, &ring, false));
        assert!(!in_ring(on_edge, &ring, true));

        let corner = Point2::new(0.0, 0.0);
        assert!(vert_in_ring(&corner, &ring));

        // collinear with an edge but past its end
        assert!(!in_ring(Point2::new(12.0, 0.0), &ring, false));
    }

    #[test]
    fn test_in_ring_concave() {
        // U shape open at the top
        let ring = [
            [0.0_f64, 0.0],
            [9.0, 0.0],
            [9.0, 9.0],
            [6.0, 9.0],
            [6.0, 3.0],
            [3.0, 3.0],
            [3.0, 9.0],
            [0.0, 9.0],
        ];
        assert!(in_ring(Point2::new(1.5, 6.0), &ring, false));
        assert!(!in_ring(Point2::new(4.5, 6.0), &ring, false));
        assert!(in_ring(Point2::new(4.5, 1.5), &ring, false));
    }

    #[test]
    fn test_inside_with_hole() {
        let outer = square(0.0, 10.0);
        let hole = square(2.0, 8.0);
        let p = Point2::new(5.0, 5.0);

        assert!(inside(p, &[outer.clone()], false));
        assert!(!inside(p, &[outer.clone(), hole.clone()], false));
        assert!(inside(Point2::new(1.0, 1.0), &[outer.clone(), hole.clone()], false));

        // on the hole's edge: inside when the boundary counts
        let on_hole_edge = Point2::new(2.0, 5.0);
        assert!(inside(on_hole_edge, &[outer.clone(), hole.clone()], false));
        assert!(!inside(on_hole_edge, &[outer, hole], true));
    }

    #[test]
    fn test_inside_rejects_by_bbox_and_empty() {
        let outer = square(0.0, 10.0);
        assert!(!inside(Point2::new(50.0, 50.0), &[outer], false));
        let none: [Vec<Point2<f64>>; 0] = [];
        assert!(!inside(Point2::new(0.0, 0.0), &none, false));
    }

    #[test]
    fn test_areas() {
        let ring = square(0.0, 10.0);
        assert_relative_eq!(area_of_selection(&ring), 100.0);
        assert_relative_eq!(signed_area_of_ring(&ring), 100.0);

        let mut reversed = ring.clone();
        reversed.reverse();
        assert_relative_eq!(area_of_selection(&reversed), 100.0);
        assert_relative_eq!(signed_area_of_ring(&reversed), -100.0);
    }

    #[test]
    fn test_bbox_of_ring() {
        let bb = bbox_of_ring(&[[1.0_f64, 5.0], [4.0, -2.0], [0.0, 3.0]]).unwrap();
        assert_eq!(bb.min, Point2::new(0.0, -2.0));
        assert_eq!(bb.max, Point2::new(4.0, 5.0));
        assert!(bbox_of_ring::<Point2<f64>>(&[]).is_none());
    }

    #[test]
    fn test_clipper_polygon_has_holes() {
        let outer = square(0.0, 10.0);
        let hole = square(2.0, 8.0);
        let apart = square(20.0, 30.0);

        assert!(clipper_polygon_has_holes(&[outer.clone(), hole]));
        assert!(!clipper_polygon_has_holes(&[outer.clone(), apart]));
        assert!(!clipper_polygon_has_holes(&[outer]));
    }
}
