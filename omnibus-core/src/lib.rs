//! Core domain types for the Omnibus transit engine.
//!
//! The crate models a transit network as a [`Database`] of named [`Stop`]
//! values and [`Route`] values. Routes refer to their stops by name and
//! resolve them through the database whenever a metric is computed, so the
//! database remains the sole owner of every stop.
//!
//! Distances between stops are directed: `A → B` may differ from `B → A`.
//! Geometric distances use the haversine formula on [`Coordinates`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod coordinates;
mod database;
pub mod route;
mod stop;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use coordinates::{Coordinates, EARTH_RADIUS_METRES};
pub use database::{Database, DistanceError};
pub use route::{Route, RouteBuilder, RouteDescriptor, RouteError, RouteKind, RouteStats};
pub use stop::Stop;
