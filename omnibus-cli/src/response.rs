//! JSON answers to stat requests.

use omnibus_core::{Database, RouteStats};
use omnibus_router::{Itinerary, Router, Segment};
use serde::{Deserialize, Serialize};

use crate::document::StatRequest;
use crate::CliError;

const NOT_FOUND: &str = "not found";

/// One answer, matched to its request by `request_id`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    /// Metrics of a bus route.
    Bus {
        /// Identifier of the answered request.
        request_id: i64,
        /// Road length of one full run in metres.
        route_length: u64,
        /// Road length over great-circle length.
        curvature: f64,
        /// Stops visited on one full run.
        stop_count: usize,
        /// Distinct stops served.
        unique_stop_count: usize,
    },
    /// Buses serving a stop, sorted by name.
    Stop {
        /// Identifier of the answered request.
        request_id: i64,
        /// Route names.
        buses: Vec<String>,
    },
    /// Fastest itinerary between two stops.
    Route {
        /// Identifier of the answered request.
        request_id: i64,
        /// Total time in minutes.
        total_time: f64,
        /// Waits and rides in travel order.
        items: Vec<RouteItem>,
    },
    /// The named bus or stop is unknown, or no itinerary exists.
    NotFound {
        /// Identifier of the answered request.
        request_id: i64,
        /// Always `"not found"`.
        error_message: String,
    },
}

/// One step of a route answer, times in minutes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    /// Wait at a stop.
    Wait {
        /// Stop waited at.
        stop_name: String,
        /// Wait time in minutes.
        time: f64,
    },
    /// Ride a bus.
    Bus {
        /// Route ridden.
        bus: String,
        /// Legs covered.
        span_count: usize,
        /// Riding time in minutes.
        time: f64,
    },
}

impl From<&Segment> for RouteItem {
    fn from(segment: &Segment) -> Self {
        match segment {
            Segment::Wait { stop, .. } => Self::Wait {
                stop_name: stop.clone(),
                time: segment.minutes(),
            },
            Segment::Ride {
                route, span_count, ..
            } => Self::Bus {
                bus: route.clone(),
                span_count: *span_count,
                time: segment.minutes(),
            },
        }
    }
}

impl StatResponse {
    fn not_found(request_id: i64) -> Self {
        Self::NotFound {
            request_id,
            error_message: NOT_FOUND.to_owned(),
        }
    }

    fn bus(request_id: i64, stats: RouteStats) -> Self {
        Self::Bus {
            request_id,
            route_length: stats.length,
            curvature: stats.curvature,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
        }
    }
}

/// Answer one stat request.
pub fn answer(
    request: &StatRequest,
    database: &Database,
    router: &Router,
) -> Result<StatResponse, CliError> {
    let request_id = request.id();
    let response = match request {
        StatRequest::Bus { name, .. } => match database.route_stats(name) {
            Some(stats) => StatResponse::bus(request_id, stats?),
            None => StatResponse::not_found(request_id),
        },
        StatRequest::Stop { name, .. } => match database.stop(name) {
            Some(stop) => StatResponse::Stop {
                request_id,
                buses: stop.routes().map(str::to_owned).collect(),
            },
            None => StatResponse::not_found(request_id),
        },
        StatRequest::Route { from, to, .. } => match router.find_route(from, to)? {
            Itinerary::Found(journey) => StatResponse::Route {
                request_id,
                total_time: journey.total_minutes(),
                items: journey.segments.iter().map(RouteItem::from).collect(),
            },
            Itinerary::Unreachable => StatResponse::not_found(request_id),
        },
    };
    Ok(response)
}
