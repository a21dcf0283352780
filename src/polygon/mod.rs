//! Ring predicates and boolean set operations.
//!
//! This module provides:
//! - Ring equality up to rotation and winding
//! - Point-in-ring and point-in-polygon tests, with or without the boundary
//! - Ring area and bounding box
//! - Union, intersection and difference of two faces
//!
//! All functions take rings as slices of any [`Position`](crate::Position),
//! open or self-closing.
//!
//! # Example
//!
//! ```
//! use plangraph::polygon::{ring_equals, set_operation, BooleanConfig, SetOperation};
//!
//! let room = [[0.0_f64, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]];
//! let overlap = [[0.0_f64, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]];
//!
//! let outcome = set_operation(
//!     SetOperation::Intersection,
//!     &room,
//!     &overlap,
//!     &BooleanConfig::default(),
//! )
//! .unwrap();
//! assert!(ring_equals(outcome.ring().unwrap(), &room));
//! ```

mod boolean;
mod bridge;
mod ring;

pub use boolean::{
    point_in_face, set_operation, BooleanConfig, PointLocation, SetOperation, SetOutcome,
};
pub use ring::{
    area_of_selection, bbox_of_ring, clipper_polygon_has_holes, drop_closing_vertex, in_ring,
    inside, ring_equals, signed_area_of_ring, vert_in_ring,
};
