//! Test-only network fixtures shared by unit, behaviour and property tests.

use crate::{Coordinates, Database, RouteBuilder, RouteDescriptor, RouteError, RouteKind, Stop};

/// Incrementally describes a small transit network.
///
/// Stops are applied before routes when [`NetworkFixture::build`] runs, the
/// same order a transit-book document uses.
#[derive(Debug, Clone, Default)]
pub struct NetworkFixture {
    stops: Vec<Stop>,
    routes: Vec<RouteDescriptor>,
}

impl NetworkFixture {
    /// Start an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a stop with directed distances in metres.
    #[must_use]
    pub fn stop(mut self, name: &str, latitude: f64, longitude: f64, distances: &[(&str, u32)]) -> Self {
        self.stops.push(Stop::with_distances(
            name,
            Coordinates::new(latitude, longitude),
            distances.iter().copied(),
        ));
        self
    }

    /// Declare a route over named stops.
    #[must_use]
    pub fn route(mut self, kind: RouteKind, name: &str, stops: &[&str]) -> Self {
        self.routes
            .push(RouteDescriptor::new(kind, name, stops.iter().copied()));
        self
    }

    /// Materialise the database.
    pub fn build(self) -> Result<Database, RouteError> {
        let mut database = Database::new();
        for stop in self.stops {
            database.add_stop(stop);
        }
        for descriptor in self.routes {
            let route = RouteBuilder::new(&mut database).build(descriptor)?;
            database.add_route(route);
        }
        Ok(database)
    }
}

/// The two-stop loop used throughout the routing documentation.
///
/// `Universam` declares 1800 m to `Biryulyovo Tovarnaya`; the reverse leg is
/// mirrored. Route `297` is cyclic over
/// `[Biryulyovo Tovarnaya, Universam, Biryulyovo Tovarnaya]`.
pub fn biryulyovo_loop() -> Result<Database, RouteError> {
    NetworkFixture::new()
        .stop("Biryulyovo Tovarnaya", 55.6, 37.6, &[])
        .stop("Universam", 55.6, 37.64, &[("Biryulyovo Tovarnaya", 1_800)])
        .route(
            RouteKind::Cyclic,
            "297",
            &["Biryulyovo Tovarnaya", "Universam", "Biryulyovo Tovarnaya"],
        )
        .build()
}

/// A network with two linear routes sharing a transfer stop, plus an
/// isolated stop no route serves.
///
/// ```text
///   A ──1000── B ──2000── C          (route "1", linear)
///              B ──1500── D          (route "2", linear)
///   Island                           (no route)
/// ```
pub fn transfer_network() -> Result<Database, RouteError> {
    NetworkFixture::new()
        .stop("A", 55.60, 37.60, &[("B", 1_000)])
        .stop("B", 55.61, 37.61, &[("C", 2_000), ("D", 1_500)])
        .stop("C", 55.62, 37.62, &[])
        .stop("D", 55.61, 37.63, &[])
        .stop("Island", 55.70, 37.70, &[])
        .route(RouteKind::Linear, "1", &["A", "B", "C"])
        .route(RouteKind::Linear, "2", &["B", "D"])
        .build()
}
