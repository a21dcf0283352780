//! Floating-point geometric primitives and operations.

mod point2;
mod segment2;
mod vec2;

pub use point2::{distance_between_points, Point2, Position};
pub use segment2::{
    edge_direction, point_distance_to_segment, projection_of_point_to_line, Segment2,
    SegmentDistance,
};
pub use vec2::{unit_perp_vector, unit_vector, Vec2};

use num_traits::Float;

/// Converts an `f64` constant into `F`.
///
/// Infallible for `f32` and `f64`; other `Float` types that cannot represent
/// the value get NaN.
#[inline]
pub(crate) fn cast<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}
