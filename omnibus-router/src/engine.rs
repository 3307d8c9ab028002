//! Shortest-path search over a finished [`DirectedWeightedGraph`].
//!
//! Construction preprocesses the graph into a compressed sparse row (CSR)
//! adjacency so each query walks contiguous slices of outgoing edge ids.
//! Searches run Dijkstra from the `pathfinding` crate on integer nanosecond
//! costs, then pick the cheapest parallel edge for each hop of the vertex
//! path. Costs and path weights saturate rather than overflow, so absurdly
//! slow parameters still produce an answer.

use std::ops::Add;
use std::time::Duration;

use pathfinding::num_traits::Zero;
use pathfinding::prelude::dijkstra;

use crate::graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};

/// A minimum-weight path between two vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo {
    /// Sum of the edge weights.
    pub weight: Duration,
    /// Edges in traversal order; empty when source and target coincide.
    pub edges: Vec<EdgeId>,
}

/// Preprocessed graph answering point-to-point shortest-path queries.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use omnibus_router::{DirectedWeightedGraph, Edge, ShortestPaths};
///
/// # fn main() -> Result<(), omnibus_router::GraphError> {
/// let mut graph = DirectedWeightedGraph::new(3);
/// graph.add_edge(Edge { from: 0, to: 1, weight: Duration::from_secs(5) })?;
/// graph.add_edge(Edge { from: 1, to: 2, weight: Duration::from_secs(5) })?;
/// graph.add_edge(Edge { from: 0, to: 2, weight: Duration::from_secs(20) })?;
///
/// let paths = ShortestPaths::new(graph);
/// let path = paths.shortest_path(0, 2).expect("connected");
/// assert_eq!(path.edges, vec![0, 1]);
/// assert_eq!(path.weight, Duration::from_secs(10));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    graph: DirectedWeightedGraph,
    offsets: Vec<usize>,
    outgoing: Vec<EdgeId>,
}

impl ShortestPaths {
    /// Preprocess `graph` for querying.
    pub fn new(graph: DirectedWeightedGraph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut offsets = vec![0_usize; vertex_count + 1];
        for edge in graph.edges() {
            if let Some(slot) = offsets.get_mut(edge.from + 1) {
                *slot += 1;
            }
        }
        for vertex in 1..offsets.len() {
            let previous = offsets.get(vertex - 1).copied().unwrap_or_default();
            if let Some(slot) = offsets.get_mut(vertex) {
                *slot += previous;
            }
        }

        // Edge ids are visited in ascending order, so each vertex's slice
        // stays sorted by id.
        let mut cursor = offsets.clone();
        let mut outgoing = vec![0; graph.edge_count()];
        for (id, edge) in graph.edges().iter().enumerate() {
            if let Some(position) = cursor.get_mut(edge.from) {
                if let Some(slot) = outgoing.get_mut(*position) {
                    *slot = id;
                }
                *position += 1;
            }
        }

        Self {
            graph,
            offsets,
            outgoing,
        }
    }

    /// The underlying graph.
    pub const fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Minimum-weight path from `from` to `to`.
    ///
    /// Returns `None` when either vertex is outside the graph or `to` is not
    /// reachable. A query with `from == to` yields an empty zero-weight path.
    pub fn shortest_path(&self, from: VertexId, to: VertexId) -> Option<PathInfo> {
        let vertex_count = self.graph.vertex_count();
        if from >= vertex_count || to >= vertex_count {
            return None;
        }
        let (vertices, _) = dijkstra(&from, |&vertex| self.successors(vertex), |&vertex| vertex == to)?;

        let mut weight = Duration::ZERO;
        let mut edges = Vec::with_capacity(vertices.len().saturating_sub(1));
        for (&tail, &head) in vertices.iter().zip(vertices.iter().skip(1)) {
            let (id, edge) = self.cheapest_edge(tail, head)?;
            weight = weight.saturating_add(edge.weight);
            edges.push(id);
        }
        Some(PathInfo { weight, edges })
    }

    fn outgoing(&self, vertex: VertexId) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        let start = self.offsets.get(vertex).copied().unwrap_or_default();
        let end = self.offsets.get(vertex + 1).copied().unwrap_or(start);
        self.outgoing
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .filter_map(|&id| self.graph.edge(id).map(|edge| (id, edge)))
    }

    fn successors(&self, vertex: VertexId) -> Vec<(VertexId, Cost)> {
        self.outgoing(vertex)
            .map(|(_, edge)| (edge.to, Cost::from(edge.weight)))
            .collect()
    }

    /// Cheapest edge between two vertices, lowest id on ties.
    fn cheapest_edge(&self, tail: VertexId, head: VertexId) -> Option<(EdgeId, &Edge)> {
        self.outgoing(tail)
            .filter(|(_, edge)| edge.to == head)
            .min_by_key(|&(id, edge)| (edge.weight, id))
    }
}

/// Search cost in whole nanoseconds, pinned at `u64::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Cost(u64);

impl From<Duration> for Cost {
    fn from(weight: Duration) -> Self {
        Self(u64::try_from(weight.as_nanos()).unwrap_or(u64::MAX))
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Zero for Cost {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
