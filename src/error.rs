//! Error types for plangraph operations.

use thiserror::Error;

/// A boolean operation produced a result that is not a single simple ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BooleanError {
    /// The result is one polygon with a hole in it.
    #[error("boolean result contains a hole")]
    HoleArtifact,

    /// The result falls apart into several disjoint polygons.
    #[error("boolean result splits the face into disjoint parts")]
    SplitFace,
}

/// A string did not name a set operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown set operation `{0}`, expected union, intersection or difference")]
pub struct UnknownOperation(pub String);

/// A graph violates the data model's reference invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Two vertices share an id.
    #[error("duplicate vertex id `{0}`")]
    DuplicateVertex(String),

    /// An edge endpoint does not resolve to a vertex.
    #[error("edge `{edge}` references missing vertex `{vertex}`")]
    MissingVertex {
        edge: String,
        vertex: String,
    },

    /// A face references an edge that is not in the graph.
    #[error("face `{face}` references missing edge `{edge}`")]
    MissingEdge {
        face: String,
        edge: String,
    },

    /// A face's edge loop does not close.
    #[error("edge loop of face `{face}` is not closed")]
    OpenFace {
        face: String,
    },
}
