//! Graph record types in normalized and denormalized form.

use crate::primitives::{Point2, Position, Segment2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Entity identifier assigned by the editing layer.
pub type Id = String;

/// A point in the plan, identified by `id`.
///
/// Derived `PartialEq` compares ids too; use [`Position`] based helpers such
/// as [`ring_equals`](crate::polygon::ring_equals) to compare by value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    pub id: Id,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(id: impl Into<Id>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }

    #[inline]
    pub fn point(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

impl Position for Vertex {
    type Scalar = f64;

    #[inline]
    fn position(&self) -> Point2<f64> {
        self.point()
    }
}

/// An edge between two vertices, referenced by id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub id: Id,
    pub v1: Id,
    pub v2: Id,
}

impl Edge {
    pub fn new(id: impl Into<Id>, v1: impl Into<Id>, v2: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            v1: v1.into(),
            v2: v2.into(),
        }
    }

    /// Start and end vertex ids when traversed with `reverse`.
    #[inline]
    pub fn directed(&self, reverse: bool) -> (&str, &str) {
        if reverse {
            (self.v2.as_str(), self.v1.as_str())
        } else {
            (self.v1.as_str(), self.v2.as_str())
        }
    }

    #[inline]
    pub fn touches(&self, vertex_id: &str) -> bool {
        self.v1 == vertex_id || self.v2 == vertex_id
    }
}

/// A face's use of an edge. `reverse` means the face walks it `v2 → v1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeRef {
    pub edge_id: Id,
    pub reverse: bool,
}

impl EdgeRef {
    pub fn new(edge_id: impl Into<Id>, reverse: bool) -> Self {
        Self {
            edge_id: edge_id.into(),
            reverse,
        }
    }
}

/// A region bounded by a closed loop of edge refs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    pub id: Id,
    pub edge_refs: Vec<EdgeRef>,
}

impl Face {
    pub fn new(id: impl Into<Id>, edge_refs: Vec<EdgeRef>) -> Self {
        Self {
            id: id.into(),
            edge_refs,
        }
    }

    pub fn uses_edge(&self, edge_id: &str) -> bool {
        self.edge_refs.iter().any(|r| r.edge_id == edge_id)
    }
}

/// Normalized geometry graph: edges and faces refer to other entities by id.
///
/// Lookups and relation queries live in the indexer methods on this type.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Graph {
    pub id: Id,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,
}

impl Graph {
    /// An empty graph.
    pub fn new(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// An edge carrying copies of its endpoint vertices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmbeddedEdge {
    pub id: Id,
    pub v1: Vertex,
    pub v2: Vertex,
}

impl EmbeddedEdge {
    #[inline]
    pub fn segment(&self) -> Segment2<f64> {
        Segment2::between(&self.v1, &self.v2)
    }
}

/// One step of a denormalized face's edge loop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceEdge {
    pub reverse: bool,
    pub edge: EmbeddedEdge,
}

impl FaceEdge {
    #[inline]
    pub fn edge_id(&self) -> &str {
        &self.edge.id
    }

    /// Endpoints in traversal order.
    #[inline]
    pub fn directed(&self) -> (&Vertex, &Vertex) {
        if self.reverse {
            (&self.edge.v2, &self.edge.v1)
        } else {
            (&self.edge.v1, &self.edge.v2)
        }
    }
}

/// A face whose edge loop embeds its edges and vertices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmbeddedFace {
    pub id: Id,
    pub edges: Vec<FaceEdge>,
}

impl EmbeddedFace {
    /// The face's vertex loop, recomputed on every call.
    ///
    /// Each edge contributes its endpoints in traversal order and runs of the
    /// same vertex id collapse into one. A closed loop therefore comes back
    /// self-closing, with the first vertex repeated at the end.
    pub fn vertices(&self) -> Vec<&Vertex> {
        let mut loop_vertices: Vec<&Vertex> = self
            .edges
            .iter()
            .flat_map(|face_edge| {
                let (start, end) = face_edge.directed();
                [start, end]
            })
            .collect();
        loop_vertices.dedup_by(|a, b| a.id == b.id);
        loop_vertices
    }
}

/// Geometry graph with every reference resolved into an embedded value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DenormalizedGraph {
    pub id: Id,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<EmbeddedEdge>,
    pub faces: Vec<EmbeddedFace>,
}
