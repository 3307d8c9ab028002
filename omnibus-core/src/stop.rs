//! Named stops with directed road distances.

use std::collections::{BTreeMap, BTreeSet};

use crate::Coordinates;

/// A named location served by zero or more routes.
///
/// `distance_to` is directed: the road distance from this stop to a
/// neighbour need not equal the distance back. A stop that a route mentions
/// before it is declared exists as a placeholder with default coordinates
/// and no distances.
///
/// # Examples
/// ```
/// use omnibus_core::{Coordinates, Stop};
///
/// let stop = Stop::with_distances(
///     "Universam",
///     Coordinates::new(55.6, 37.64),
///     [("Biryulyovo Tovarnaya", 1800)],
/// );
/// assert_eq!(stop.distance_to("Biryulyovo Tovarnaya"), Some(1800));
/// assert_eq!(stop.distance_to("Elsewhere"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    name: String,
    coordinates: Coordinates,
    distances: BTreeMap<String, u32>,
    routes: BTreeSet<String>,
    declared: bool,
}

impl Stop {
    /// Construct a declared stop without road distances.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self::with_distances(name, coordinates, std::iter::empty::<(String, u32)>())
    }

    /// Construct a declared stop with directed road distances in metres.
    pub fn with_distances<I, N>(name: impl Into<String>, coordinates: Coordinates, distances: I) -> Self
    where
        I: IntoIterator<Item = (N, u32)>,
        N: Into<String>,
    {
        Self {
            name: name.into(),
            coordinates,
            distances: distances
                .into_iter()
                .map(|(other, metres)| (other.into(), metres))
                .collect(),
            routes: BTreeSet::new(),
            declared: true,
        }
    }

    /// Construct a placeholder for a stop referenced before its declaration.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            declared: false,
            ..Self::new(name, Coordinates::default())
        }
    }

    /// Unique stop name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stop position.
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Directed road distance to `other` in metres, if one is known.
    pub fn distance_to(&self, other: &str) -> Option<u32> {
        self.distances.get(other).copied()
    }

    /// Iterate over directed road distances from this stop.
    pub fn distances(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.distances
            .iter()
            .map(|(other, metres)| (other.as_str(), *metres))
    }

    /// Names of the routes serving this stop, sorted.
    pub fn routes(&self) -> impl Iterator<Item = &str> + '_ {
        self.routes.iter().map(String::as_str)
    }

    /// Whether the stop is only a placeholder created by a route reference.
    pub const fn is_placeholder(&self) -> bool {
        !self.declared
    }

    /// Record a directed distance unless one is already known.
    pub(crate) fn insert_distance_if_absent(&mut self, other: &str, metres: u32) {
        if !self.distances.contains_key(other) {
            self.distances.insert(other.to_owned(), metres);
        }
    }

    pub(crate) fn add_route(&mut self, route: &str) {
        self.routes.insert(route.to_owned());
    }

    pub(crate) fn remove_route(&mut self, route: &str) {
        self.routes.remove(route);
    }

    /// Fold a re-declaration into this stop.
    ///
    /// Coordinates are replaced, distances are upserted and route
    /// memberships are kept.
    pub(crate) fn merge(&mut self, declaration: Self) {
        self.coordinates = declaration.coordinates;
        self.distances.extend(declaration.distances);
        self.declared = self.declared || declaration.declared;
    }
}
