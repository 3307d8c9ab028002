//! Facade crate for the Omnibus transit routing core.
//!
//! This crate re-exports the transit database model from `omnibus-core` and
//! the itinerary router from `omnibus-router`.

#![forbid(unsafe_code)]

pub use omnibus_core::{
    Coordinates, Database, DistanceError, Route, RouteBuilder, RouteDescriptor, RouteError,
    RouteKind, RouteStats, Stop,
};
pub use omnibus_router::{
    Itinerary, Journey, Router, RouterError, RoutingParams, RoutingParamsError, RoutingSnapshot,
    Segment,
};

#[cfg(feature = "test-support")]
pub use omnibus_core::test_support;
