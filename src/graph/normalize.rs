//! Conversion between normalized and denormalized graphs.

use super::model::{
    DenormalizedGraph, Edge, EdgeRef, EmbeddedEdge, EmbeddedFace, Face, FaceEdge, Graph, Vertex,
};
use crate::error::GraphError;
use std::collections::HashSet;
use tracing::debug;

/// Resolves every id reference in `graph` into an embedded copy.
///
/// Vertices are carried over unchanged. Each edge embeds its two endpoint
/// vertices, and each face embeds its edges in loop order together with their
/// traversal flags. The input is not modified.
///
/// # Errors
///
/// [`GraphError::MissingVertex`] or [`GraphError::MissingEdge`] for the first
/// reference that does not resolve.
///
/// # Example
///
/// ```
/// use plangraph::graph::{denormalize, normalize, Edge, EdgeRef, Face, Graph, Vertex};
///
/// let mut graph = Graph::new("plan");
/// graph.vertices = vec![
///     Vertex::new("a", 0.0, 0.0),
///     Vertex::new("b", 4.0, 0.0),
///     Vertex::new("c", 0.0, 3.0),
/// ];
/// graph.edges = vec![
///     Edge::new("ab", "a", "b"),
///     Edge::new("bc", "b", "c"),
///     Edge::new("ca", "c", "a"),
/// ];
/// graph.faces = vec![Face::new(
///     "room",
///     vec![
///         EdgeRef::new("ab", false),
///         EdgeRef::new("bc", false),
///         EdgeRef::new("ca", false),
///     ],
/// )];
///
/// let embedded = denormalize(&graph).unwrap();
/// assert_eq!(embedded.faces[0].vertices().len(), 4);
/// assert_eq!(normalize(&embedded), graph);
/// ```
pub fn denormalize(graph: &Graph) -> Result<DenormalizedGraph, GraphError> {
    let edges = graph
        .edges
        .iter()
        .map(|edge| embed_edge(graph, edge))
        .collect::<Result<Vec<_>, _>>()?;

    let faces = graph
        .faces
        .iter()
        .map(|face| embed_face(graph, face))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        graph = %graph.id,
        vertices = graph.vertices.len(),
        edges = edges.len(),
        faces = faces.len(),
        "denormalized graph"
    );

    Ok(DenormalizedGraph {
        id: graph.id.clone(),
        vertices: graph.vertices.clone(),
        edges,
        faces,
    })
}

fn embed_edge(graph: &Graph, edge: &Edge) -> Result<EmbeddedEdge, GraphError> {
    let resolve = |vertex_id: &str| {
        graph
            .vertex_for_id(vertex_id)
            .cloned()
            .ok_or_else(|| GraphError::MissingVertex {
                edge: edge.id.clone(),
                vertex: vertex_id.to_string(),
            })
    };

    Ok(EmbeddedEdge {
        id: edge.id.clone(),
        v1: resolve(&edge.v1)?,
        v2: resolve(&edge.v2)?,
    })
}

fn embed_face(graph: &Graph, face: &Face) -> Result<EmbeddedFace, GraphError> {
    let edges = face
        .edge_refs
        .iter()
        .map(|edge_ref| {
            let edge = graph
                .edge_for_id(&edge_ref.edge_id)
                .ok_or_else(|| GraphError::MissingEdge {
                    face: face.id.clone(),
                    edge: edge_ref.edge_id.clone(),
                })?;
            Ok(FaceEdge {
                reverse: edge_ref.reverse,
                edge: embed_edge(graph, edge)?,
            })
        })
        .collect::<Result<Vec<_>, GraphError>>()?;

    Ok(EmbeddedFace {
        id: face.id.clone(),
        edges,
    })
}

/// Rebuilds a normalized graph from embedded values.
///
/// Edges are deduplicated by id, the graph's own edges first and then those
/// reachable through faces. Vertices are deduplicated by id the same way: the
/// graph's own vertices, then the endpoints of the deduplicated edges. The
/// first occurrence of each id wins and keeps its position.
pub fn normalize(graph: &DenormalizedGraph) -> Graph {
    let face_edges = graph
        .faces
        .iter()
        .flat_map(|face| face.edges.iter().map(|face_edge| &face_edge.edge));
    let edges = unique_by_id(graph.edges.iter().chain(face_edges), |e| e.id.as_str());

    let endpoints = edges.iter().copied().flat_map(|edge| [&edge.v1, &edge.v2]);
    let vertices = unique_by_id(graph.vertices.iter().chain(endpoints), |v| v.id.as_str());

    let faces: Vec<Face> = graph
        .faces
        .iter()
        .map(|face| Face {
            id: face.id.clone(),
            edge_refs: face
                .edges
                .iter()
                .map(|face_edge| EdgeRef::new(face_edge.edge_id(), face_edge.reverse))
                .collect(),
        })
        .collect();

    debug!(
        graph = %graph.id,
        vertices = vertices.len(),
        edges = edges.len(),
        faces = faces.len(),
        "normalized graph"
    );

    Graph {
        id: graph.id.clone(),
        vertices: vertices.into_iter().cloned().collect::<Vec<Vertex>>(),
        edges: edges
            .into_iter()
            .map(|edge| Edge::new(edge.id.as_str(), edge.v1.id.as_str(), edge.v2.id.as_str()))
            .collect(),
        faces,
    }
}

fn unique_by_id<'a, T>(items: impl Iterator<Item = &'a T>, id: fn(&T) -> &str) -> Vec<&'a T> {
    let mut seen = HashSet::new();
    items.filter(|&item| seen.insert(id(item))).collect()
}
