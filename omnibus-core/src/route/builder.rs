//! Materialise routes from descriptors.

use crate::{Database, Route, RouteError, RouteKind};

/// Unresolved route declaration: kind, name and ordered stop names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Route shape.
    pub kind: RouteKind,
    /// Unique route name.
    pub name: String,
    /// Stop names in declaration order.
    pub stops: Vec<String>,
}

impl RouteDescriptor {
    /// Construct a descriptor from any iterable of stop names.
    pub fn new<I, S>(kind: RouteKind, name: impl Into<String>, stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            name: name.into(),
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }
}

/// Binds route descriptors to the stops of a [`Database`].
///
/// Stops that have not been declared yet are created as placeholders, so
/// routes may be declared before the stops they serve.
///
/// # Examples
/// ```
/// use omnibus_core::{Database, RouteBuilder, RouteDescriptor, RouteKind};
///
/// # fn main() -> Result<(), omnibus_core::RouteError> {
/// let mut db = Database::new();
/// let route = RouteBuilder::new(&mut db).build(RouteDescriptor::new(
///     RouteKind::Cyclic,
///     "297",
///     ["Biryulyovo Tovarnaya", "Universam", "Biryulyovo Tovarnaya"],
/// ))?;
/// db.add_route(route);
///
/// let stop = db.stop("Universam").expect("created on demand");
/// assert!(stop.is_placeholder());
/// assert_eq!(stop.routes().collect::<Vec<_>>(), vec!["297"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RouteBuilder<'db> {
    database: &'db mut Database,
}

impl<'db> RouteBuilder<'db> {
    /// Create a builder resolving stops against `database`.
    pub const fn new(database: &'db mut Database) -> Self {
        Self { database }
    }

    /// Resolve `descriptor` into a [`Route`].
    ///
    /// The route is not registered with the database; pass it to
    /// [`Database::add_route`] for that.
    pub fn build(&mut self, descriptor: RouteDescriptor) -> Result<Route, RouteError> {
        let RouteDescriptor { kind, name, stops } = descriptor;
        if stops.len() < 2 {
            return Err(RouteError::TooFewStops {
                name,
                count: stops.len(),
            });
        }
        for stop in &stops {
            self.database.stop_or_insert(stop);
        }
        Ok(Route::new(name, kind, stops))
    }
}
