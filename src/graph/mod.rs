//! Boundary-representation graph of a floorplan.
//!
//! The graph comes in two forms:
//!
//! - **Normalized** ([`Graph`]): edges name their vertices by id and faces
//!   name their edges through [`EdgeRef`]s. This is the form the indexer
//!   queries.
//! - **Denormalized** ([`DenormalizedGraph`]): every reference is replaced by
//!   an embedded copy, so a face carries its whole edge loop.
//!
//! [`denormalize`] and [`normalize`] convert between the two.

mod index;
mod model;
mod normalize;

pub use model::{
    DenormalizedGraph, Edge, EdgeRef, EmbeddedEdge, EmbeddedFace, Face, FaceEdge, Graph, Id,
    Vertex,
};
pub use normalize::{denormalize, normalize};
