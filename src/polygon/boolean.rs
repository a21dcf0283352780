//! Boolean set operations on single-face rings.
//!
//! Union and intersection run through Clipper on an integer grid. Both
//! operands are scaled by [`BooleanConfig::clip_scale`] and rounded, inflated
//! by a small mitered offset, combined, deflated by the same offset and
//! scaled back. The inflation closes hairline gaps between faces that share
//! an edge, so edge-adjacent rooms merge into one ring.
//!
//! Difference skips that pipeline and uses `geo`'s exact boolean routine on
//! the unscaled rings.
//!
//! Every operation either yields a single ring, yields nothing, or reports
//! why the result cannot be used as one face.
//!
//! # Example
//!
//! ```
//! use plangraph::polygon::{set_operation, BooleanConfig, SetOperation, SetOutcome};
//! use plangraph::Point2;
//!
//! let left = [[0.0_f64, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]];
//! let right = [[10.0_f64, 0.0], [20.0, 0.0], [20.0, 10.0], [10.0, 10.0]];
//!
//! let merged = set_operation(SetOperation::Union, &left, &right, &BooleanConfig::default())
//!     .unwrap();
//! let ring = merged.ring().unwrap();
//! assert!(ring.contains(&Point2::new(20.0, 10.0)));
//! assert!(!ring.contains(&Point2::new(30.0, 0.0)));
//! ```

use super::bridge::{flatten_rings, open_ring, snap_to_grid, to_geo_polygon};
use super::ring::{clipper_polygon_has_holes, drop_closing_vertex};
use crate::error::{BooleanError, UnknownOperation};
use crate::primitives::{Point2, Position};
use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{Coord, MultiPolygon, Polygon};
use geo_clipper::{Clipper, EndType, JoinType};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Clipper receives coordinates that are already on the integer grid.
const GRID_FACTOR: f64 = 1.0;

/// The boolean operation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SetOperation {
    Union,
    Intersection,
    Difference,
}

impl SetOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Intersection => "intersection",
            Self::Difference => "difference",
        }
    }
}

impl fmt::Display for SetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetOperation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "union" => Ok(Self::Union),
            "intersection" => Ok(Self::Intersection),
            "difference" => Ok(Self::Difference),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}

/// Tuning for the Clipper pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BooleanConfig {
    /// Multiplier that maps plan units onto the integer grid.
    pub clip_scale: f64,
    /// Inflation applied before clipping, in grid units.
    pub offset: f64,
    /// Miter limit of the inflation, as a multiple of `offset`.
    pub miter_limit: f64,
}

impl Default for BooleanConfig {
    fn default() -> Self {
        Self {
            clip_scale: 100.0,
            offset: 0.01,
            miter_limit: 2.0,
        }
    }
}

impl BooleanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clip_scale(mut self, clip_scale: f64) -> Self {
        self.clip_scale = clip_scale;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }
}

/// A usable boolean result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SetOutcome {
    /// A single simple ring in open form.
    Ring(Vec<Point2<f64>>),
    /// The operation removed everything.
    Empty,
}

impl SetOutcome {
    /// The ring, if there is one.
    pub fn ring(&self) -> Option<&[Point2<f64>]> {
        match self {
            Self::Ring(ring) => Some(ring),
            Self::Empty => None,
        }
    }

    pub fn into_ring(self) -> Option<Vec<Point2<f64>>> {
        match self {
            Self::Ring(ring) => Some(ring),
            Self::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Applies `op` to two rings, each describing one simple polygon.
///
/// Rings may be open or self-closing and in either winding. See the module
/// documentation for how each operation is computed.
///
/// # Errors
///
/// - [`BooleanError::HoleArtifact`] when the result is a polygon with a hole.
/// - [`BooleanError::SplitFace`] when the result is several disjoint polygons.
pub fn set_operation<P, Q>(
    op: SetOperation,
    a: &[P],
    b: &[Q],
    config: &BooleanConfig,
) -> Result<SetOutcome, BooleanError>
where
    P: Position<Scalar = f64>,
    Q: Position<Scalar = f64>,
{
    debug!(%op, a = a.len(), b = b.len(), "set operation");
    match op {
        SetOperation::Union => clip_on_grid(a, b, config, |subject, clip| {
            Clipper::union(subject, clip, GRID_FACTOR)
        }),
        SetOperation::Intersection => clip_on_grid(a, b, config, |subject, clip| {
            Clipper::intersection(subject, clip, GRID_FACTOR)
        }),
        SetOperation::Difference => exact_difference(a, b),
    }
}

fn clip_on_grid<P, Q>(
    a: &[P],
    b: &[Q],
    config: &BooleanConfig,
    combine: impl Fn(&MultiPolygon<f64>, &MultiPolygon<f64>) -> MultiPolygon<f64>,
) -> Result<SetOutcome, BooleanError>
where
    P: Position<Scalar = f64>,
    Q: Position<Scalar = f64>,
{
    let subject = inflate(&snap_to_grid(a, config.clip_scale), config);
    let clip = inflate(&snap_to_grid(b, config.clip_scale), config);

    let combined = combine(&subject, &clip);
    let deflated = Clipper::offset(
        &combined,
        -config.offset,
        JoinType::Miter(config.miter_limit),
        EndType::ClosedPolygon,
        GRID_FACTOR,
    );

    classify(flatten_rings(&deflated, config.clip_scale))
}

fn inflate(polygon: &Polygon<f64>, config: &BooleanConfig) -> MultiPolygon<f64> {
    Clipper::offset(
        polygon,
        config.offset,
        JoinType::Miter(config.miter_limit),
        EndType::ClosedPolygon,
        GRID_FACTOR,
    )
}

fn classify(mut rings: Vec<Vec<Point2<f64>>>) -> Result<SetOutcome, BooleanError> {
    debug!(rings = rings.len(), "clipped result");
    match rings.len() {
        0 => Ok(SetOutcome::Empty),
        1 => Ok(SetOutcome::Ring(rings.swap_remove(0))),
        n if clipper_polygon_has_holes(&rings) => {
            warn!(rings = n, "boolean result has a hole");
            Err(BooleanError::HoleArtifact)
        }
        n => {
            warn!(rings = n, "boolean result split into disjoint parts");
            Err(BooleanError::SplitFace)
        }
    }
}

fn exact_difference<P, Q>(a: &[P], b: &[Q]) -> Result<SetOutcome, BooleanError>
where
    P: Position<Scalar = f64>,
    Q: Position<Scalar = f64>,
{
    if is_degenerate(a) {
        return Ok(SetOutcome::Empty);
    }
    if is_degenerate(b) {
        let ring = drop_closing_vertex(a).iter().map(|p| p.position()).collect();
        return Ok(SetOutcome::Ring(ring));
    }

    let subject = to_geo_polygon(a);
    let clip = to_geo_polygon(b);
    let result = geo::BooleanOps::difference(&subject, &clip);
    debug!(polygons = result.0.len(), "exact difference");

    match result.0.as_slice() {
        [] => Ok(SetOutcome::Empty),
        [polygon] if polygon.interiors().is_empty() => {
            Ok(SetOutcome::Ring(open_ring(polygon.exterior(), 1.0)))
        }
        [_] => {
            warn!("difference leaves a hole");
            Err(BooleanError::HoleArtifact)
        }
        parts => {
            warn!(polygons = parts.len(), "difference split into disjoint parts");
            Err(BooleanError::SplitFace)
        }
    }
}

fn is_degenerate<P: Position>(ring: &[P]) -> bool {
    drop_closing_vertex(ring).len() < 3
}

/// Where a point lies relative to a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    OnBoundary,
    Outside,
}

/// Locates a point against a face's vertex loop, boundary included.
///
/// # Example
///
/// ```
/// use plangraph::polygon::{point_in_face, PointLocation};
/// use plangraph::Point2;
///
/// let face = [[0.0_f64, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]];
/// assert_eq!(point_in_face(Point2::new(2.0, 2.0), &face), PointLocation::Inside);
/// assert_eq!(point_in_face(Point2::new(4.0, 1.0), &face), PointLocation::OnBoundary);
/// assert_eq!(point_in_face(Point2::new(5.0, 1.0), &face), PointLocation::Outside);
/// ```
pub fn point_in_face<P: Position<Scalar = f64>>(
    point: Point2<f64>,
    face_vertices: &[P],
) -> PointLocation {
    let polygon = to_geo_polygon(face_vertices);
    match polygon.coordinate_position(&Coord {
        x: point.x,
        y: point.y,
    }) {
        CoordPos::Inside => PointLocation::Inside,
        CoordPos::OnBoundary => PointLocation::OnBoundary,
        CoordPos::Outside => PointLocation::Outside,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Aabb2;
    use crate::polygon::area_of_selection;
    use approx::assert_relative_eq;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2<f64>> {
        vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ]
    }

    fn run(
        op: SetOperation,
        a: &[Point2<f64>],
        b: &[Point2<f64>],
    ) -> Result<SetOutcome, BooleanError> {
        set_operation(op, a, b, &BooleanConfig::default())
    }

    #[test]
    fn test_union_of_edge_adjacent_squares() {
        let left = rect(0.0, 0.0, 10.0, 10.0);
        let right = rect(10.0, 0.0, 20.0, 10.0);

        let outcome = run(SetOperation::Union, &left, &right).unwrap();
        let ring = outcome.ring().unwrap();

        let bb = Aabb2::from_positions(ring).unwrap();
        assert_relative_eq!(bb.min.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(bb.max.x, 20.0, epsilon = 1e-6);
        assert_relative_eq!(bb.min.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(bb.max.y, 10.0, epsilon = 1e-6);
        assert_relative_eq!(area_of_selection(ring), 200.0, epsilon = 1e-6);
    }

    #[test]
    fn test_union_accepts_closed_rings() {
        let mut left = rect(0.0, 0.0, 10.0, 10.0);
        left.push(left[0]);
        let right = rect(5.0, 5.0, 15.0, 15.0);

        let outcome = run(SetOperation::Union, &left, &right).unwrap();
        assert_relative_eq!(area_of_selection(outcome.ring().unwrap()), 175.0, epsilon = 1e-6);
    }

    #[test]
    fn test_union_of_disjoint_squares_splits() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(5.0, 5.0, 6.0, 6.0);
        assert_eq!(run(SetOperation::Union, &a, &b), Err(BooleanError::SplitFace));
    }

    #[test]
    fn test_union_closing_a_courtyard_reports_hole() {
        let u_room = vec![
            Point2::new(0.0, 0.0),
            Point2::new(9.0, 0.0),
            Point2::new(9.0, 9.0),
            Point2::new(6.0, 9.0),
            Point2::new(6.0, 3.0),
            Point2::new(3.0, 3.0),
            Point2::new(3.0, 9.0),
            Point2::new(0.0, 9.0),
        ];
        let bar = rect(0.0, 7.0, 9.0, 10.0);
        assert_eq!(
            run(SetOperation::Union, &u_room, &bar),
            Err(BooleanError::HoleArtifact)
        );
    }

    #[test]
    fn test_union_snaps_off_grid_coordinates() {
        // 10.123 and 10.1234 land on the same grid column at scale 100
        let left = rect(0.123, 0.0, 10.123, 10.0);
        let right = rect(10.1234, 0.0, 20.123, 10.004);

        let outcome = run(SetOperation::Union, &left, &right).unwrap();
        let ring = outcome.ring().unwrap();

        let bb = Aabb2::from_positions(ring).unwrap();
        assert_relative_eq!(bb.min.x, 0.12, epsilon = 1e-9);
        assert_relative_eq!(bb.max.x, 20.12, epsilon = 1e-9);
        assert_relative_eq!(bb.max.y, 10.0, epsilon = 1e-9);
        assert_relative_eq!(area_of_selection(ring), 200.0, epsilon = 1e-6);
    }

    #[test]
    fn test_intersection_of_overlapping_squares() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 15.0, 15.0);

        let outcome = run(SetOperation::Intersection, &a, &b).unwrap();
        let ring = outcome.ring().unwrap();
        assert_relative_eq!(area_of_selection(ring), 25.0, epsilon = 1e-6);
    }

    #[test]
    fn test_intersection_of_disjoint_squares_is_empty() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(20.0, 20.0, 30.0, 30.0);
        assert_eq!(run(SetOperation::Intersection, &a, &b), Ok(SetOutcome::Empty));
    }

    #[test]
    fn test_difference_cuts_notch() {
        let room = rect(0.0, 0.0, 10.0, 10.0);
        let corner = rect(5.0, 5.0, 15.0, 15.0);

        let outcome = run(SetOperation::Difference, &room, &corner).unwrap();
        let ring = outcome.ring().unwrap();
        assert!(ring.contains(&Point2::new(5.0, 5.0)));
        assert_relative_eq!(area_of_selection(ring), 75.0, epsilon = 1e-9);
        assert_ne!(ring.first(), ring.last());
    }

    #[test]
    fn test_difference_covering_everything_is_empty() {
        let small = rect(2.0, 2.0, 4.0, 4.0);
        let big = rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(run(SetOperation::Difference, &small, &big), Ok(SetOutcome::Empty));
    }

    #[test]
    fn test_difference_reports_hole() {
        let room = rect(0.0, 0.0, 10.0, 10.0);
        let column = rect(4.0, 4.0, 6.0, 6.0);
        assert_eq!(
            run(SetOperation::Difference, &room, &column),
            Err(BooleanError::HoleArtifact)
        );
    }

    #[test]
    fn test_difference_reports_split() {
        let room = rect(0.0, 0.0, 10.0, 10.0);
        let wall = rect(4.0, -1.0, 6.0, 11.0);
        assert_eq!(
            run(SetOperation::Difference, &room, &wall),
            Err(BooleanError::SplitFace)
        );
    }

    #[test]
    fn test_difference_with_degenerate_clip() {
        let room = rect(0.0, 0.0, 10.0, 10.0);
        let line = [Point2::new(0.0, 0.0), Point2::new(5.0, 5.0)];
        assert_eq!(
            run(SetOperation::Difference, &room, &line),
            Ok(SetOutcome::Ring(room.clone()))
        );
        assert_eq!(run(SetOperation::Difference, &line, &room), Ok(SetOutcome::Empty));
    }

    #[test]
    fn test_config_builders() {
        let config = BooleanConfig::new()
            .with_clip_scale(1000.0)
            .with_offset(2.0)
            .with_miter_limit(3.0);
        assert_eq!(config.clip_scale, 1000.0);
        assert_eq!(config.offset, 2.0);
        assert_eq!(config.miter_limit, 3.0);
        assert_eq!(BooleanConfig::new(), BooleanConfig::default());

        let a = rect(0.0, 0.0, 1.5, 1.5);
        let b = rect(1.0, 1.0, 2.5, 2.5);
        let outcome = set_operation(SetOperation::Intersection, &a, &b, &config).unwrap();
        assert_relative_eq!(area_of_selection(outcome.ring().unwrap()), 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_set_operation_from_str() {
        assert_eq!("union".parse::<SetOperation>(), Ok(SetOperation::Union));
        assert_eq!("intersection".parse::<SetOperation>(), Ok(SetOperation::Intersection));
        assert_eq!("difference".parse::<SetOperation>(), Ok(SetOperation::Difference));
        assert_eq!(
            "xor".parse::<SetOperation>(),
            Err(UnknownOperation("xor".to_string()))
        );
        assert_eq!(SetOperation::Difference.to_string(), "difference");
    }

    #[test]
    fn test_outcome_accessors() {
        let ring = rect(0.0, 0.0, 1.0, 1.0);
        let outcome = SetOutcome::Ring(ring.clone());
        assert!(!outcome.is_empty());
        assert_eq!(outcome.into_ring(), Some(ring));
        assert!(SetOutcome::Empty.is_empty());
        assert_eq!(SetOutcome::Empty.ring(), None);
    }

    #[test]
    fn test_point_in_face() {
        let face = rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(point_in_face(Point2::new(5.0, 5.0), &face), PointLocation::Inside);
        assert_eq!(point_in_face(Point2::new(0.0, 3.0), &face), PointLocation::OnBoundary);
        assert_eq!(point_in_face(Point2::new(10.0, 10.0), &face), PointLocation::OnBoundary);
        assert_eq!(point_in_face(Point2::new(-1.0, 3.0), &face), PointLocation::Outside);
    }
}
