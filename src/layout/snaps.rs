//! Synthetic snap targets for rectangle drawing.

use crate::primitives::{cast, Point2, Position};
use num_traits::Float;

/// The midline a synthetic snap was mirrored across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionAxis {
    /// Mirrored across the vertical midline (x changes).
    Vertical,
    /// Mirrored across the horizontal midline (y changes).
    Horizontal,
}

/// A snap target derived from an existing point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticSnap<'a, F, P> {
    pub point: Point2<F>,
    pub axis: ReflectionAxis,
    /// The candidate this target was reflected from.
    pub source: &'a P,
}

/// Reflects snap candidates so that rectangle corners can snap too.
///
/// While a rectangle is dragged from `rect_start` to `cursor`, only the corner
/// under the cursor is tested against snap candidates. Mirroring a candidate
/// across the rectangle's vertical midline moves a point lying near the free
/// corner `(rect_start.x, cursor.y)` next to the cursor; the horizontal
/// midline does the same for `(cursor.x, rect_start.y)`. The ordinary cursor
/// snap can then catch them. Each candidate yields two targets, vertical first.
pub fn synthetic_rectangle_snaps<'a, F, P>(
    points: &'a [P],
    rect_start: Point2<F>,
    cursor: Point2<F>,
) -> Vec<SyntheticSnap<'a, F, P>>
where
    F: Float,
    P: Position<Scalar = F>,
{
    let two: F = cast(2.0);
    let mid = rect_start.midpoint(cursor);

    points
        .iter()
        .flat_map(|source| {
            let p = source.position();
            [
                SyntheticSnap {
                    point: Point2::new(two * mid.x - p.x, p.y),
                    axis: ReflectionAxis::Vertical,
                    source,
                },
                SyntheticSnap {
                    point: Point2::new(p.x, two * mid.y - p.y),
                    axis: ReflectionAxis::Horizontal,
                    source,
                },
            ]
        })
        .collect()
}
