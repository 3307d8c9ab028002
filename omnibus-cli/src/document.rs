//! Transit-book documents: base requests that populate a database and stat
//! requests answered against it.

use std::collections::BTreeMap;

use omnibus_core::{
    Coordinates, Database, RouteBuilder, RouteDescriptor, RouteError, RouteKind, Stop,
};
use serde::{Deserialize, Serialize};

/// A complete transit-book input document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TransitDocument {
    /// Routing settings. Command-line overrides take precedence.
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,
    /// Stop and bus declarations.
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    /// Queries answered once the database is complete.
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// Vehicle velocity and wait time carried by a document.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RoutingSettings {
    /// Wait at every stop, in minutes.
    pub bus_wait_time: f64,
    /// Vehicle velocity in km/h.
    pub bus_velocity: f64,
}

/// A declaration that populates the database.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    /// Declare a stop with its directed road distances.
    Stop {
        /// Stop name.
        name: String,
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
        /// Road distances in metres keyed by neighbouring stop.
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    /// Declare a bus route.
    Bus {
        /// Route name.
        name: String,
        /// Stops in travel order.
        stops: Vec<String>,
        /// Whether the route is a loop rather than an out-and-back line.
        is_roundtrip: bool,
    },
}

/// A query against the populated database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    /// Route metrics for a bus.
    Bus {
        /// Request identifier echoed in the response.
        id: i64,
        /// Route name.
        name: String,
    },
    /// Buses serving a stop.
    Stop {
        /// Request identifier echoed in the response.
        id: i64,
        /// Stop name.
        name: String,
    },
    /// Fastest itinerary between two stops.
    Route {
        /// Request identifier echoed in the response.
        id: i64,
        /// Origin stop.
        from: String,
        /// Destination stop.
        to: String,
    },
}

impl StatRequest {
    /// Identifier echoed in the response.
    pub const fn id(&self) -> i64 {
        match self {
            Self::Bus { id, .. } | Self::Stop { id, .. } | Self::Route { id, .. } => *id,
        }
    }
}

impl TransitDocument {
    /// Build the database: every stop first, then every bus.
    pub fn database(&self) -> Result<Database, RouteError> {
        let mut database = Database::new();
        for request in &self.base_requests {
            if let BaseRequest::Stop {
                name,
                latitude,
                longitude,
                road_distances,
            } = request
            {
                database.add_stop(Stop::with_distances(
                    name.clone(),
                    Coordinates::new(*latitude, *longitude),
                    road_distances
                        .iter()
                        .map(|(other, &metres)| (other.clone(), metres)),
                ));
            }
        }
        for request in &self.base_requests {
            if let BaseRequest::Bus {
                name,
                stops,
                is_roundtrip,
            } = request
            {
                let kind = if *is_roundtrip {
                    RouteKind::Cyclic
                } else {
                    RouteKind::Linear
                };
                let descriptor = RouteDescriptor::new(kind, name.clone(), stops.iter().cloned());
                let route = RouteBuilder::new(&mut database).build(descriptor)?;
                database.add_route(route);
            }
        }
        Ok(database)
    }
}
