//! Shortest-time itineraries over an [`omnibus_core::Database`].
//!
//! The router derives a directed weighted graph from the database. Every
//! stop is split into a *board* and an *alight* vertex:
//!
//! - a **wait edge** runs from a stop's alight vertex to its board vertex and
//!   costs the configured wait time;
//! - a **ride edge** runs from the board vertex of one stop to the alight
//!   vertex of any later stop on the same route traversal and costs the road
//!   distance between them divided by the vehicle velocity.
//!
//! A query runs from the origin's alight vertex to the destination's alight
//! vertex, so every edge on the shortest path maps to exactly one
//! [`Segment`] of the resulting [`Itinerary`].
//!
//! The derived graph is a [`RoutingSnapshot`]. [`Router`] rebuilds it in
//! full whenever its database or [`RoutingParams`] change.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod error;
mod graph;
mod itinerary;
mod params;
mod router;
mod snapshot;
mod vertices;

pub use engine::{PathInfo, ShortestPaths};
pub use error::RouterError;
pub use graph::{DirectedWeightedGraph, Edge, EdgeId, GraphError, VertexId};
pub use itinerary::{Itinerary, Journey, Segment};
pub use params::{RoutingParams, RoutingParamsError};
pub use router::Router;
pub use snapshot::{EdgeInfo, RoutingSnapshot};
pub use vertices::{StopVertices, VertexMap, VertexRole};
