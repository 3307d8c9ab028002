//! Proptest strategies for router property tests.
//!
//! Generated networks declare a road distance between every ordered pair of
//! stops, so any route over them is consistent and the graph always builds.

use omnibus_core::test_support::NetworkFixture;
use omnibus_core::{Database, RouteKind};
use proptest::prelude::*;

/// A generated network plus the stop names it declares.
#[derive(Debug, Clone)]
pub struct GeneratedNetwork {
    /// Stop names in declaration order.
    pub stops: Vec<String>,
    /// Routes as kind plus stop indices.
    pub routes: Vec<(RouteKind, Vec<usize>)>,
    /// Distance in metres for each ordered pair, row-major.
    pub distances: Vec<u32>,
}

impl GeneratedNetwork {
    /// Materialise the network as a database.
    pub fn database(&self) -> Database {
        let mut fixture = NetworkFixture::new();
        let count = self.stops.len();
        for (from, name) in self.stops.iter().enumerate() {
            let declared: Vec<(&str, u32)> = self
                .stops
                .iter()
                .enumerate()
                .filter(|&(to, _)| to != from)
                .filter_map(|(to, other)| {
                    self.distances
                        .get(from * count + to)
                        .map(|&metres| (other.as_str(), metres))
                })
                .collect();
            #[expect(
                clippy::cast_precision_loss,
                reason = "small stop indices spread coordinates"
            )]
            let offset = from as f64 * 0.001;
            fixture = fixture.stop(name, 55.6 + offset, 37.6 + offset, &declared);
        }
        for (index, (kind, stops)) in self.routes.iter().enumerate() {
            let names: Vec<&str> = stops
                .iter()
                .filter_map(|&stop| self.stops.get(stop).map(String::as_str))
                .collect();
            fixture = fixture.route(*kind, &format!("R{index}"), &names);
        }
        fixture.build().expect("generated routes have at least two stops")
    }
}

fn kind_strategy() -> impl Strategy<Value = RouteKind> {
    prop_oneof![Just(RouteKind::Linear), Just(RouteKind::Cyclic)]
}

fn route_strategy(stop_count: usize) -> impl Strategy<Value = (RouteKind, Vec<usize>)> {
    let indices: Vec<usize> = (0..stop_count).collect();
    (
        kind_strategy(),
        proptest::sample::subsequence(indices, 2..=stop_count).prop_shuffle(),
    )
}

/// Networks of `2..=max_stops` stops served by one to four routes.
pub fn network_strategy(max_stops: usize) -> impl Strategy<Value = GeneratedNetwork> {
    (2..=max_stops).prop_flat_map(|count| {
        (
            proptest::collection::vec(route_strategy(count), 1..=4),
            proptest::collection::vec(100_u32..5_000, count * count),
        )
            .prop_map(move |(routes, distances)| GeneratedNetwork {
                stops: (0..count).map(|index| format!("S{index}")).collect(),
                routes,
                distances,
            })
    })
}

/// Networks whose routes are all linear.
pub fn linear_network_strategy(max_stops: usize) -> impl Strategy<Value = GeneratedNetwork> {
    network_strategy(max_stops).prop_map(|mut network| {
        for (kind, _) in &mut network.routes {
            *kind = RouteKind::Linear;
        }
        network
    })
}
