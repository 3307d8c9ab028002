//! Stateful router owning the current routing snapshot.

use std::sync::Arc;

use log::{debug, warn};
use omnibus_core::Database;

use crate::error::RouterError;
use crate::itinerary::Itinerary;
use crate::params::RoutingParams;
use crate::snapshot::RoutingSnapshot;

/// Answers fastest-itinerary queries over a database.
///
/// The router holds a shared handle to a [`Database`] and the
/// [`RoutingParams`] last applied. Changing either rebuilds the whole graph.
/// A failed rebuild leaves the previous database, parameters and graph in
/// place.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use omnibus_core::{Coordinates, Database, RouteBuilder, RouteDescriptor, RouteKind, Stop};
/// use omnibus_router::{Router, RoutingParams};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut db = Database::new();
/// db.add_stop(Stop::new("Biryulyovo Tovarnaya", Coordinates::new(55.6, 37.6)));
/// db.add_stop(Stop::with_distances(
///     "Universam",
///     Coordinates::new(55.6, 37.64),
///     [("Biryulyovo Tovarnaya", 1_800)],
/// ));
/// let route = RouteBuilder::new(&mut db).build(RouteDescriptor::new(
///     RouteKind::Cyclic,
///     "297",
///     ["Biryulyovo Tovarnaya", "Universam", "Biryulyovo Tovarnaya"],
/// ))?;
/// db.add_route(route);
///
/// let router = Router::new(Arc::new(db), RoutingParams::new(40.0, 6.0)?)?;
/// let itinerary = router.find_route("Biryulyovo Tovarnaya", "Universam")?;
/// let minutes = itinerary.journey().map(|journey| journey.total_minutes());
/// assert!(minutes.is_some_and(|m| (m - 8.7).abs() < 1e-9));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Router {
    database: Option<Arc<Database>>,
    params: RoutingParams,
    snapshot: Option<RoutingSnapshot>,
}

impl Router {
    /// Bind a database and build its graph.
    pub fn new(database: Arc<Database>, params: RoutingParams) -> Result<Self, RouterError> {
        let snapshot = rebuild_snapshot(&database, &params)?;
        Ok(Self {
            database: Some(database),
            params,
            snapshot: Some(snapshot),
        })
    }

    /// A router with parameters but no database. Queries fail with
    /// [`RouterError::GraphNotBuilt`] until [`Router::set_database`] succeeds.
    pub const fn unbound(params: RoutingParams) -> Self {
        Self {
            database: None,
            params,
            snapshot: None,
        }
    }

    /// Discard the graph and build a new one from the bound database.
    pub fn rebuild(&mut self) -> Result<(), RouterError> {
        let database = self.database.as_ref().ok_or(RouterError::NoDatabase)?;
        self.snapshot = Some(rebuild_snapshot(database, &self.params)?);
        Ok(())
    }

    /// Replace the routing parameters and rebuild.
    ///
    /// Without a bound database the parameters are stored and no graph is
    /// built.
    pub fn set_params(&mut self, params: RoutingParams) -> Result<(), RouterError> {
        if let Some(database) = &self.database {
            self.snapshot = Some(rebuild_snapshot(database, &params)?);
        }
        self.params = params;
        Ok(())
    }

    /// Replace the database and rebuild.
    pub fn set_database(&mut self, database: Arc<Database>) -> Result<(), RouterError> {
        let snapshot = rebuild_snapshot(&database, &self.params)?;
        self.database = Some(database);
        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// Current routing parameters.
    pub const fn params(&self) -> &RoutingParams {
        &self.params
    }

    /// Bound database, if any.
    pub fn database(&self) -> Option<&Arc<Database>> {
        self.database.as_ref()
    }

    /// Current graph, if one has been built.
    pub const fn snapshot(&self) -> Option<&RoutingSnapshot> {
        self.snapshot.as_ref()
    }

    /// Fastest itinerary from `from` to `to`.
    ///
    /// Unknown stop names and disconnected stops both yield
    /// [`Itinerary::Unreachable`].
    pub fn find_route(&self, from: &str, to: &str) -> Result<Itinerary, RouterError> {
        let snapshot = self.snapshot.as_ref().ok_or(RouterError::GraphNotBuilt)?;
        Ok(snapshot.find_route(from, to))
    }
}

fn rebuild_snapshot(
    database: &Database,
    params: &RoutingParams,
) -> Result<RoutingSnapshot, RouterError> {
    match RoutingSnapshot::build(database, params) {
        Ok(snapshot) => {
            debug!(
                "built routing graph: {} stops, {} vertices, {} edges",
                snapshot.vertices().stop_count(),
                snapshot.graph().vertex_count(),
                snapshot.graph().edge_count()
            );
            Ok(snapshot)
        }
        Err(err) => {
            warn!("routing graph rebuild failed: {err}");
            Err(err)
        }
    }
}
