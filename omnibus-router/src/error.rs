use thiserror::Error;

use crate::graph::GraphError;

/// Errors from building or querying a [`crate::Router`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// A query arrived before any routing graph was built.
    #[error("routing graph has not been built")]
    GraphNotBuilt,
    /// A rebuild was requested without a database to build from.
    #[error("router is not bound to a database")]
    NoDatabase,
    /// A route drives a leg with no declared road distance.
    ///
    /// The database and its routes disagree; the graph cannot be built.
    #[error("route {route} has no road distance from {from} to {to}")]
    MissingDistance {
        /// Route driving the leg.
        route: String,
        /// Leg origin.
        from: String,
        /// Leg destination.
        to: String,
    },
    /// A route names a stop the database does not hold.
    #[error("route {route} serves unknown stop {stop}")]
    UnknownStop {
        /// Route naming the stop.
        route: String,
        /// Missing stop.
        stop: String,
    },
    /// The graph rejected an edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
