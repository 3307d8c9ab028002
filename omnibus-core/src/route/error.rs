use thiserror::Error;

/// Errors from [`crate::RouteBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The descriptor named fewer than two stops.
    ///
    /// Lengths and curvature are undefined for such a route, so callers must
    /// supply at least two stop names.
    #[error("route {name} needs at least two stops, got {count}")]
    TooFewStops {
        /// Name of the rejected route.
        name: String,
        /// Number of stop names supplied.
        count: usize,
    },
}
