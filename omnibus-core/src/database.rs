//! The authoritative store of stops and routes.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use geo::{BoundingRect, MultiPoint, Point, Rect};
use thiserror::Error;

use crate::{Coordinates, Route, RouteStats, Stop};

/// Errors raised while resolving a route leg through the [`Database`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// A route names a stop the database does not hold.
    #[error("unknown stop {name}")]
    UnknownStop {
        /// Name of the missing stop.
        name: String,
    },
    /// No directed road distance is recorded for a leg.
    #[error("no road distance from {from} to {to}")]
    MissingDistance {
        /// Leg origin.
        from: String,
        /// Leg destination.
        to: String,
    },
}

/// Owns every [`Stop`] and [`Route`] of a transit network.
///
/// Both collections are keyed by name and iterate in name order, so anything
/// derived from a database is reproducible.
///
/// # Examples
/// ```
/// use omnibus_core::{Coordinates, Database, Stop};
///
/// let mut db = Database::new();
/// db.add_stop(Stop::with_distances(
///     "Universam",
///     Coordinates::new(55.6, 37.64),
///     [("Biryulyovo Tovarnaya", 1800)],
/// ));
///
/// // The reverse direction is filled in until declared otherwise.
/// assert_eq!(db.road_distance("Biryulyovo Tovarnaya", "Universam"), Ok(1800));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Database {
    stops: BTreeMap<String, Stop>,
    routes: BTreeMap<String, Route>,
}

impl Database {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a stop, merging with any earlier declaration or placeholder.
    ///
    /// For each declared distance `stop → other`, the reverse distance
    /// `other → stop` is recorded too unless `other` already has one.
    /// Explicit declarations therefore always win over mirrored values.
    pub fn add_stop(&mut self, stop: Stop) {
        let name = stop.name().to_owned();
        let declared: Vec<(String, u32)> = stop
            .distances()
            .map(|(other, metres)| (other.to_owned(), metres))
            .collect();

        match self.stops.entry(name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(stop);
            }
            Entry::Occupied(mut slot) => slot.get_mut().merge(stop),
        }

        for (other, metres) in declared {
            self.stop_or_insert(&other)
                .insert_distance_if_absent(&name, metres);
        }
    }

    /// Fetch a stop by name, creating a placeholder if it is unknown.
    pub fn stop_or_insert(&mut self, name: &str) -> &mut Stop {
        self.stops
            .entry(name.to_owned())
            .or_insert_with(|| Stop::placeholder(name))
    }

    /// Fetch a stop by name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stops.get(name)
    }

    /// Register a route and record it on every stop it serves.
    ///
    /// A route with the same name replaces the earlier one, including its
    /// stop memberships.
    pub fn add_route(&mut self, route: Route) {
        if let Some(previous) = self.routes.remove(route.name()) {
            for stop in previous.stops() {
                if let Some(entry) = self.stops.get_mut(stop) {
                    entry.remove_route(previous.name());
                }
            }
        }
        for stop in route.stops() {
            self.stop_or_insert(stop).add_route(route.name());
        }
        self.routes.insert(route.name().to_owned(), route);
    }

    /// Fetch a route by name.
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    /// Iterate over all stops in name order.
    pub fn stops(&self) -> impl ExactSizeIterator<Item = &Stop> + '_ {
        self.stops.values()
    }

    /// Iterate over all routes in name order.
    pub fn routes(&self) -> impl ExactSizeIterator<Item = &Route> + '_ {
        self.routes.values()
    }

    /// Directed road distance between two stops in metres.
    pub fn road_distance(&self, from: &str, to: &str) -> Result<u32, DistanceError> {
        self.stop(from)
            .ok_or_else(|| DistanceError::UnknownStop { name: from.to_owned() })?
            .distance_to(to)
            .ok_or_else(|| DistanceError::MissingDistance {
                from: from.to_owned(),
                to: to.to_owned(),
            })
    }

    /// Coordinates of a named stop.
    pub fn coordinates_of(&self, name: &str) -> Result<Coordinates, DistanceError> {
        self.stop(name)
            .map(Stop::coordinates)
            .ok_or_else(|| DistanceError::UnknownStop { name: name.to_owned() })
    }

    /// Metrics of a named route, or `None` when no such route exists.
    pub fn route_stats(&self, name: &str) -> Option<Result<RouteStats, DistanceError>> {
        self.route(name).map(|route| route.stats(self))
    }

    /// Bounding box of all declared stops (`x = longitude`, `y = latitude`).
    ///
    /// Placeholders are ignored; `None` when no stop has been declared.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let points: MultiPoint<f64> = self
            .stops()
            .filter(|stop| !stop.is_placeholder())
            .map(|stop| Point::from(stop.coordinates()))
            .collect();
        points.bounding_rect()
    }
}
