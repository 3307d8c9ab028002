//! Directed weighted multigraph with dense vertex and edge ids.

use std::time::Duration;

use thiserror::Error;

/// Dense vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// Dense edge identifier, assigned in insertion order.
pub type EdgeId = usize;

/// A weighted directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Tail vertex.
    pub from: VertexId,
    /// Head vertex.
    pub to: VertexId,
    /// Traversal cost.
    pub weight: Duration,
}

/// Errors from [`DirectedWeightedGraph::add_edge`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An endpoint lies outside the graph.
    #[error("vertex {vertex} is outside a graph of {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

/// A fixed-size directed graph that accepts parallel edges.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use omnibus_router::{DirectedWeightedGraph, Edge};
///
/// # fn main() -> Result<(), omnibus_router::GraphError> {
/// let mut graph = DirectedWeightedGraph::new(2);
/// let id = graph.add_edge(Edge { from: 0, to: 1, weight: Duration::from_secs(60) })?;
/// assert_eq!(id, 0);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedWeightedGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl DirectedWeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Number of vertices.
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Insert `edge` and return its id.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeId, GraphError> {
        for vertex in [edge.from, edge.to] {
            if vertex >= self.vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.edges.push(edge);
        Ok(self.edges.len() - 1)
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// All edges in id order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
