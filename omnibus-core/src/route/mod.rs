//! Routes over named stops.
//!
//! A [`Route`] is either [`RouteKind::Linear`] (driven out along the declared
//! stops and back again) or [`RouteKind::Cyclic`] (driven once along the
//! declared stops, which usually end where they started). Both kinds expose
//! the same metrics; the differences live in [`Route::traversals`] and
//! [`RouteKind::stop_count`].

mod builder;
mod error;

use std::collections::HashSet;

pub use builder::{RouteBuilder, RouteDescriptor};
pub use error::RouteError;

use crate::{Coordinates, Database, DistanceError};

/// Shape of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RouteKind {
    /// Travels the declared stops forward, then backward to the start.
    Linear,
    /// Travels the declared stops once in declaration order.
    Cyclic,
}

impl RouteKind {
    /// Number of stops visited on one full run given `declared` stop names.
    ///
    /// # Examples
    /// ```
    /// use omnibus_core::RouteKind;
    ///
    /// assert_eq!(RouteKind::Linear.stop_count(3), 5);
    /// assert_eq!(RouteKind::Cyclic.stop_count(3), 3);
    /// ```
    pub const fn stop_count(self, declared: usize) -> usize {
        match self {
            Self::Linear => declared.saturating_mul(2).saturating_sub(1),
            Self::Cyclic => declared,
        }
    }
}

/// Aggregate metrics for a route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteStats {
    /// Stops visited on one full run.
    pub stop_count: usize,
    /// Distinct stops on the route.
    pub unique_stop_count: usize,
    /// Road length of one full run in metres.
    pub length: u64,
    /// Great-circle length of one full run in metres.
    pub geometric_length: f64,
    /// Ratio of road length to great-circle length.
    pub curvature: f64,
}

/// A named route over stops owned by a [`Database`].
///
/// Stops are held by name and resolved through the database when metrics
/// are computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: String,
    kind: RouteKind,
    stops: Vec<String>,
}

impl Route {
    pub(crate) const fn new(name: String, kind: RouteKind, stops: Vec<String>) -> Self {
        Self { name, kind, stops }
    }

    /// Unique route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Route shape.
    pub const fn kind(&self) -> RouteKind {
        self.kind
    }

    /// Stop names in declaration order (one way for linear routes).
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Stops visited on one full run.
    pub const fn stop_count(&self) -> usize {
        self.kind.stop_count(self.stops.len())
    }

    /// Number of distinct stops on the route.
    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// Physical stop sequences a vehicle drives without turning around.
    ///
    /// Cyclic routes yield the declared order only. Linear routes yield the
    /// declared order followed by its reverse.
    ///
    /// # Examples
    /// ```
    /// use omnibus_core::{Database, RouteBuilder, RouteDescriptor, RouteKind};
    ///
    /// # fn main() -> Result<(), omnibus_core::RouteError> {
    /// let mut db = Database::new();
    /// let route = RouteBuilder::new(&mut db).build(RouteDescriptor::new(
    ///     RouteKind::Linear,
    ///     "750",
    ///     ["A", "B", "C"],
    /// ))?;
    /// assert_eq!(
    ///     route.traversals(),
    ///     vec![vec!["A", "B", "C"], vec!["C", "B", "A"]]
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn traversals(&self) -> Vec<Vec<&str>> {
        let forward: Vec<&str> = self.stops.iter().map(String::as_str).collect();
        match self.kind {
            RouteKind::Cyclic => vec![forward],
            RouteKind::Linear => {
                let backward = forward.iter().rev().copied().collect();
                vec![forward, backward]
            }
        }
    }

    /// Great-circle length of one full run in metres.
    #[expect(
        clippy::float_arithmetic,
        reason = "great-circle lengths are floating-point sums"
    )]
    pub fn geometric_length(&self, database: &Database) -> Result<f64, DistanceError> {
        let mut total = 0.0;
        for traversal in self.traversals() {
            for (from, to) in legs(&traversal) {
                total += Coordinates::distance(
                    database.coordinates_of(from)?,
                    database.coordinates_of(to)?,
                );
            }
        }
        Ok(total)
    }

    /// Road length of one full run in metres.
    ///
    /// Every leg must have a directed distance in the database; a missing one
    /// is reported rather than guessed.
    pub fn real_length(&self, database: &Database) -> Result<u64, DistanceError> {
        let mut total = 0_u64;
        for traversal in self.traversals() {
            for (from, to) in legs(&traversal) {
                total = total.saturating_add(u64::from(database.road_distance(from, to)?));
            }
        }
        Ok(total)
    }

    /// Compute every metric in one pass over the database.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "curvature is a floating-point ratio of lengths"
    )]
    pub fn stats(&self, database: &Database) -> Result<RouteStats, DistanceError> {
        let length = self.real_length(database)?;
        let geometric_length = self.geometric_length(database)?;
        Ok(RouteStats {
            stop_count: self.stop_count(),
            unique_stop_count: self.unique_stop_count(),
            length,
            geometric_length,
            curvature: length as f64 / geometric_length,
        })
    }
}

/// Consecutive `(from, to)` pairs of a traversal.
pub(crate) fn legs<'a>(traversal: &'a [&'a str]) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    traversal
        .iter()
        .copied()
        .zip(traversal.iter().skip(1).copied())
}
