//! Tolerance constants and epsilon-aware predicates.
//!
//! The constants are tuned for floorplan coordinates (centimetres or
//! millimetres) and are not exactness guarantees.

mod predicates;

pub use predicates::{
    have_similar_angles, intersection_of_lines, points_coincide, pts_are_collinear,
};

/// Distance below which two vertices are the same vertex by value.
/// Also the area tolerance of the collinearity test.
pub const VERTEX_EPSILON: f64 = 1e-5;

/// Tolerance used by [`intersection_of_lines`] for endpoint exclusion and
/// segment bounds.
pub const INTERSECTION_EPSILON: f64 = 1e-7;

/// Two directions are similar when they differ by less than this fraction of π.
pub const SIMILAR_ANGLE_FRACTION: f64 = 0.05;
