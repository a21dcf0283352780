//! Conversions between plangraph rings and `geo` polygons.
//!
//! Two directions are supported:
//!
//! - **Ring → geo**: positions are copied into a closed `geo::Polygon`, either
//!   as-is or snapped onto an integer grid by multiplying with a scale factor
//!   and rounding.
//! - **geo → ring**: every exterior and interior ring of a `MultiPolygon` is
//!   divided back by the scale and returned in open form.

use super::ring::drop_closing_vertex;
use crate::primitives::{Point2, Position};
use geo::{Coord, LineString, MultiPolygon, Polygon};

/// Copies a ring into a `geo::Polygon` without rounding.
///
/// `geo` closes the exterior itself, so open and self-closing input give the
/// same polygon.
pub(crate) fn to_geo_polygon<P: Position<Scalar = f64>>(ring: &[P]) -> Polygon<f64> {
    let coords: Vec<Coord<f64>> = ring
        .iter()
        .map(|p| {
            let p = p.position();
            Coord { x: p.x, y: p.y }
        })
        .collect();
    Polygon::new(LineString::new(coords), Vec::new())
}

/// Snaps a ring onto the integer grid defined by `scale`.
///
/// Each coordinate is multiplied by `scale` and rounded to the nearest
/// integer. The values stay `f64` because Clipper takes `geo` types.
pub(crate) fn snap_to_grid<P: Position<Scalar = f64>>(ring: &[P], scale: f64) -> Polygon<f64> {
    let coords: Vec<Coord<f64>> = ring
        .iter()
        .map(|p| {
            let p = p.position();
            Coord {
                x: (p.x * scale).round(),
                y: (p.y * scale).round(),
            }
        })
        .collect();
    Polygon::new(LineString::new(coords), Vec::new())
}

/// Opens a `geo` ring and divides it by `scale`.
pub(crate) fn open_ring(line: &LineString<f64>, scale: f64) -> Vec<Point2<f64>> {
    let points: Vec<Point2<f64>> = line
        .coords()
        .map(|c| Point2::new(c.x / scale, c.y / scale))
        .collect();
    drop_closing_vertex(&points).to_vec()
}

/// Flattens a multipolygon into rings, each polygon's exterior followed by
/// its interiors.
pub(crate) fn flatten_rings(polygons: &MultiPolygon<f64>, scale: f64) -> Vec<Vec<Point2<f64>>> {
    polygons
        .iter()
        .flat_map(|polygon| {
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(|line| open_ring(line, scale))
                .collect::<Vec<_>>()
        })
        .collect()
}
