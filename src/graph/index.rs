//! Lookups and relation queries over a normalized graph.
//!
//! Every query is a linear scan over the graph's vectors.

use super::model::{Edge, Face, Graph, Vertex};
use crate::error::GraphError;
use crate::primitives::{Position, Segment2, SegmentDistance};
use crate::tolerance::points_coincide;
use std::collections::HashSet;

/// Split candidates must lie within `spacing / SPLIT_DISTANCE_DIVISOR` of the
/// edge.
const SPLIT_DISTANCE_DIVISOR: f64 = 20.0;

impl Graph {
    pub fn vertex_for_id(&self, id: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    pub fn edge_for_id(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn face_for_id(&self, id: &str) -> Option<&Face> {
        self.faces.iter().find(|f| f.id == id)
    }

    /// First vertex within [`VERTEX_EPSILON`](crate::tolerance::VERTEX_EPSILON)
    /// of `pt`.
    pub fn vertex_for_coordinates(&self, pt: impl Position<Scalar = f64>) -> Option<&Vertex> {
        let pt = pt.position();
        self.vertices
            .iter()
            .find(|v| points_coincide(v.point(), pt))
    }

    /// The face's vertex loop in edge order.
    ///
    /// Each edge ref contributes its start vertex: `v1`, or `v2` when the ref
    /// is reversed. The loop is open and consecutive duplicates are kept.
    /// Returns `None` if the face or anything it references is missing.
    ///
    /// # Example
    ///
    /// ```
    /// use plangraph::graph::{Edge, EdgeRef, Face, Graph, Vertex};
    ///
    /// let mut graph = Graph::new("plan");
    /// graph.vertices = vec![
    ///     Vertex::new("a", 0.0, 0.0),
    ///     Vertex::new("b", 4.0, 0.0),
    ///     Vertex::new("c", 0.0, 3.0),
    /// ];
    /// graph.edges = vec![
    ///     Edge::new("ab", "a", "b"),
    ///     Edge::new("cb", "c", "b"),
    ///     Edge::new("ca", "c", "a"),
    /// ];
    /// graph.faces = vec![Face::new(
    ///     "room",
    ///     vec![
    ///         EdgeRef::new("ab", false),
    ///         EdgeRef::new("cb", true),
    ///         EdgeRef::new("ca", false),
    ///     ],
    /// )];
    ///
    /// let ids: Vec<&str> = graph
    ///     .vertices_for_face_id("room")
    ///     .unwrap()
    ///     .into_iter()
    ///     .map(|v| v.id.as_str())
    ///     .collect();
    /// assert_eq!(ids, ["a", "b", "c"]);
    /// ```
    pub fn vertices_for_face_id(&self, face_id: &str) -> Option<Vec<&Vertex>> {
        let face = self.face_for_id(face_id)?;
        face.edge_refs
            .iter()
            .map(|edge_ref| {
                let edge = self.edge_for_id(&edge_ref.edge_id)?;
                let (start, _) = edge.directed(edge_ref.reverse);
                self.vertex_for_id(start)
            })
            .collect()
    }

    /// The face's edges in loop order, `None` if the face or an edge is missing.
    pub fn edges_for_face_id(&self, face_id: &str) -> Option<Vec<&Edge>> {
        let face = self.face_for_id(face_id)?;
        face.edge_refs
            .iter()
            .map(|edge_ref| self.edge_for_id(&edge_ref.edge_id))
            .collect()
    }

    pub fn edges_for_vertex_id(&self, vertex_id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.touches(vertex_id)).collect()
    }

    /// Faces whose loop passes through the vertex.
    pub fn faces_for_vertex_id(&self, vertex_id: &str) -> Vec<&Face> {
        let edge_ids: HashSet<&str> = self
            .edges_for_vertex_id(vertex_id)
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        self.faces
            .iter()
            .filter(|f| {
                f.edge_refs
                    .iter()
                    .any(|r| edge_ids.contains(r.edge_id.as_str()))
            })
            .collect()
    }

    pub fn faces_for_edge_id(&self, edge_id: &str) -> Vec<&Face> {
        self.faces.iter().filter(|f| f.uses_edge(edge_id)).collect()
    }

    /// Vertices that would split the edge if it were subdivided.
    ///
    /// A vertex qualifies when it is within `spacing / 20` of its clamped
    /// projection onto the edge. The edge's own endpoints are skipped, by id
    /// and by coincident coordinates. Returns `None` if the edge or an endpoint
    /// is missing.
    pub fn splitting_vertices_for_edge_id(
        &self,
        edge_id: &str,
        spacing: f64,
    ) -> Option<Vec<&Vertex>> {
        let edge = self.edge_for_id(edge_id)?;
        let start = self.vertex_for_id(&edge.v1)?;
        let end = self.vertex_for_id(&edge.v2)?;
        let segment = Segment2::between(start, end);
        let threshold = spacing / SPLIT_DISTANCE_DIVISOR;

        let candidates = self
            .vertices
            .iter()
            .filter(|v| {
                let is_endpoint = v.id == start.id
                    || v.id == end.id
                    || points_coincide(v.point(), segment.start)
                    || points_coincide(v.point(), segment.end);
                if is_endpoint {
                    return false;
                }
                let SegmentDistance { distance, .. } = segment.distance_to_point(v.point());
                distance < threshold
            })
            .collect();
        Some(candidates)
    }

    /// Checks the graph's reference invariants.
    ///
    /// Vertex ids must be unique, edge endpoints and face edge refs must
    /// resolve, and each face's edge loop must close. Reports the first
    /// violation found.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut vertex_ids = HashSet::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            if !vertex_ids.insert(vertex.id.as_str()) {
                return Err(GraphError::DuplicateVertex(vertex.id.clone()));
            }
        }

        for edge in &self.edges {
            for vertex in [&edge.v1, &edge.v2] {
                if !vertex_ids.contains(vertex.as_str()) {
                    return Err(GraphError::MissingVertex {
                        edge: edge.id.clone(),
                        vertex: vertex.clone(),
                    });
                }
            }
        }

        for face in &self.faces {
            let steps = face
                .edge_refs
                .iter()
                .map(|edge_ref| {
                    self.edge_for_id(&edge_ref.edge_id)
                        .map(|edge| edge.directed(edge_ref.reverse))
                        .ok_or_else(|| GraphError::MissingEdge {
                            face: face.id.clone(),
                            edge: edge_ref.edge_id.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            let n = steps.len();
            let closed = n > 0 && (0..n).all(|i| steps[i].1 == steps[(i + 1) % n].0);
            if !closed {
                return Err(GraphError::OpenFace {
                    face: face.id.clone(),
                });
            }
        }

        Ok(())
    }
}
