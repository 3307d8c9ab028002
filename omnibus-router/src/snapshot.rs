//! One complete build of the routing graph.
//!
//! A [`RoutingSnapshot`] bundles the vertex map, the preprocessed graph and
//! the side-table describing every edge. It is derived entirely from a
//! database and routing parameters and is never patched in place.

use std::time::Duration;

use omnibus_core::{Database, DistanceError, Route};

use crate::engine::ShortestPaths;
use crate::error::RouterError;
use crate::graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
use crate::itinerary::{Itinerary, Journey, Segment};
use crate::params::RoutingParams;
use crate::vertices::{StopVertices, VertexMap};

/// What a graph edge means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeInfo {
    /// Alight → board at one stop.
    Wait {
        /// Stop being waited at.
        stop: String,
        /// Edge weight, always the configured wait time.
        weight: Duration,
    },
    /// Board at one stop → alight at a later stop of the same route.
    Ride {
        /// Route ridden.
        route: String,
        /// Legs covered.
        span_count: usize,
        /// Edge weight, the accumulated driving time.
        weight: Duration,
        /// Board vertex of the origin stop.
        from: VertexId,
        /// Alight vertex of the destination stop.
        to: VertexId,
    },
}

impl EdgeInfo {
    /// Edge weight.
    pub const fn weight(&self) -> Duration {
        match self {
            Self::Wait { weight, .. } | Self::Ride { weight, .. } => *weight,
        }
    }
}

impl From<&EdgeInfo> for Segment {
    fn from(info: &EdgeInfo) -> Self {
        match info {
            EdgeInfo::Wait { stop, weight } => Self::Wait {
                stop: stop.clone(),
                duration: *weight,
            },
            EdgeInfo::Ride {
                route,
                span_count,
                weight,
                ..
            } => Self::Ride {
                route: route.clone(),
                span_count: *span_count,
                duration: *weight,
            },
        }
    }
}

/// The routing graph for one database and one set of parameters.
#[derive(Debug, Clone)]
pub struct RoutingSnapshot {
    vertices: VertexMap,
    edges: Vec<EdgeInfo>,
    paths: ShortestPaths,
}

impl RoutingSnapshot {
    /// Build the graph: assign vertices, add wait edges, add ride edges for
    /// every route, then preprocess for search.
    pub fn build(database: &Database, params: &RoutingParams) -> Result<Self, RouterError> {
        let vertices = VertexMap::from_database(database);
        let mut builder = GraphBuilder {
            database,
            params,
            vertices: &vertices,
            graph: DirectedWeightedGraph::new(vertices.vertex_count()),
            edges: Vec::new(),
        };
        builder.add_wait_edges()?;
        for route in database.routes() {
            builder.add_ride_edges(route)?;
        }
        let GraphBuilder { graph, edges, .. } = builder;
        Ok(Self {
            vertices,
            edges,
            paths: ShortestPaths::new(graph),
        })
    }

    /// Stop-to-vertex mapping of this build.
    pub const fn vertices(&self) -> &VertexMap {
        &self.vertices
    }

    /// The routing graph.
    pub const fn graph(&self) -> &DirectedWeightedGraph {
        self.paths.graph()
    }

    /// Meaning of an edge.
    pub fn edge_info(&self, id: EdgeId) -> Option<&EdgeInfo> {
        self.edges.get(id)
    }

    /// Every edge description in id order.
    pub fn edge_infos(&self) -> &[EdgeInfo] {
        &self.edges
    }

    /// Fastest itinerary between two named stops.
    pub fn find_route(&self, from: &str, to: &str) -> Itinerary {
        let (Some(origin), Some(destination)) = (self.vertices.get(from), self.vertices.get(to))
        else {
            return Itinerary::Unreachable;
        };
        let Some(path) = self.paths.shortest_path(origin.alight, destination.alight) else {
            return Itinerary::Unreachable;
        };
        let segments = path
            .edges
            .iter()
            .filter_map(|&id| self.edges.get(id))
            .map(Segment::from)
            .collect();
        Itinerary::Found(Journey {
            total: path.weight,
            segments,
        })
    }
}

struct GraphBuilder<'a> {
    database: &'a Database,
    params: &'a RoutingParams,
    vertices: &'a VertexMap,
    graph: DirectedWeightedGraph,
    edges: Vec<EdgeInfo>,
}

impl GraphBuilder<'_> {
    fn push(&mut self, edge: Edge, info: EdgeInfo) -> Result<(), RouterError> {
        let id = self.graph.add_edge(edge)?;
        debug_assert_eq!(id, self.edges.len());
        self.edges.push(info);
        Ok(())
    }

    fn add_wait_edges(&mut self) -> Result<(), RouterError> {
        let weight = self.params.wait_time();
        for stop in self.database.stops() {
            let Some(StopVertices { board, alight }) = self.vertices.get(stop.name()) else {
                continue;
            };
            self.push(
                Edge {
                    from: alight,
                    to: board,
                    weight,
                },
                EdgeInfo::Wait {
                    stop: stop.name().to_owned(),
                    weight,
                },
            )?;
        }
        Ok(())
    }

    /// For each traversal and each origin position, ride on to every later
    /// stop while accumulating road metres along the traversal.
    fn add_ride_edges(&mut self, route: &Route) -> Result<(), RouterError> {
        for traversal in route.traversals() {
            for (start, &origin) in traversal.iter().enumerate() {
                let from = self.stop_vertices(route, origin)?.board;
                let mut metres = 0_u64;
                let mut previous = origin;
                for (offset, &next) in traversal.iter().skip(start + 1).enumerate() {
                    let leg = self
                        .database
                        .road_distance(previous, next)
                        .map_err(|source| route_error(route, source))?;
                    metres = metres.saturating_add(u64::from(leg));
                    let to = self.stop_vertices(route, next)?.alight;
                    let weight = self.params.travel_time(metres);
                    self.push(
                        Edge { from, to, weight },
                        EdgeInfo::Ride {
                            route: route.name().to_owned(),
                            span_count: offset + 1,
                            weight,
                            from,
                            to,
                        },
                    )?;
                    previous = next;
                }
            }
        }
        Ok(())
    }

    fn stop_vertices(&self, route: &Route, stop: &str) -> Result<StopVertices, RouterError> {
        self.vertices
            .get(stop)
            .ok_or_else(|| RouterError::UnknownStop {
                route: route.name().to_owned(),
                stop: stop.to_owned(),
            })
    }
}

fn route_error(route: &Route, source: DistanceError) -> RouterError {
    match source {
        DistanceError::MissingDistance { from, to } => RouterError::MissingDistance {
            route: route.name().to_owned(),
            from,
            to,
        },
        DistanceError::UnknownStop { name } => RouterError::UnknownStop {
            route: route.name().to_owned(),
            stop: name,
        },
    }
}
