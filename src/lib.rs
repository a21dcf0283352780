//! plangraph - Planar geometry for floorplan editing
//!
//! A boundary-representation graph of vertices, edges and faces, together
//! with the geometry an interactive editor needs on top of it: tolerant
//! primitives, ring predicates and union, intersection and difference of
//! faces. Every operation is a pure function of borrowed input.

pub mod bounds;
pub mod error;
pub mod graph;
pub mod layout;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use error::{BooleanError, GraphError, UnknownOperation};
pub use graph::{denormalize, normalize, DenormalizedGraph, Graph};
pub use polygon::{set_operation, BooleanConfig, SetOperation, SetOutcome};
pub use primitives::{Point2, Position, Segment2, Vec2};
