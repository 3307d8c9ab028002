//! Property-based tests for the router.
//!
//! # Invariants tested
//!
//! - **Determinism:** rebuilding from the same database yields identical
//!   itineraries.
//! - **Reflexivity:** a stop reaches itself with an empty zero-time journey.
//! - **Consistency:** segment durations sum to the journey total, and every
//!   journey starts by waiting at the origin.
//! - **Wait sensitivity:** raising the wait time by Δ raises every total by at
//!   least Δ and at most Δ per wait of the previous optimum.
//! - **Symmetry:** on linear-only networks reachability is symmetric.

mod proptest_support;

use std::sync::Arc;
use std::time::Duration;

use omnibus_router::{Itinerary, Router, RoutingParams, Segment};
use proptest::prelude::*;

use proptest_support::{linear_network_strategy, network_strategy};

fn router(network: &proptest_support::GeneratedNetwork, params: RoutingParams) -> Router {
    Router::new(Arc::new(network.database()), params).expect("generated networks are consistent")
}

fn params(velocity_kmh: f64, wait_minutes: u8) -> RoutingParams {
    RoutingParams::new(velocity_kmh, f64::from(wait_minutes)).expect("valid params")
}

fn itineraries(router: &Router, stops: &[String]) -> Vec<Itinerary> {
    stops
        .iter()
        .flat_map(|from| stops.iter().map(move |to| (from, to)))
        .map(|(from, to)| router.find_route(from, to).expect("graph built"))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rebuilding_is_deterministic(
        network in network_strategy(6),
        velocity in 10.0_f64..80.0,
        wait in 0_u8..15,
    ) {
        let first = router(&network, params(velocity, wait));
        let second = router(&network, params(velocity, wait));
        prop_assert_eq!(
            itineraries(&first, &network.stops),
            itineraries(&second, &network.stops)
        );
    }

    #[test]
    fn every_stop_reaches_itself_instantly(
        network in network_strategy(6),
        wait in 0_u8..15,
    ) {
        let router = router(&network, params(40.0, wait));
        for stop in &network.stops {
            let itinerary = router.find_route(stop, stop).expect("graph built");
            let journey = itinerary.journey().expect("reflexive query is found");
            prop_assert_eq!(journey.total, Duration::ZERO);
            prop_assert!(journey.segments.is_empty());
        }
    }

    #[test]
    fn journeys_are_internally_consistent(
        network in network_strategy(6),
        velocity in 10.0_f64..80.0,
        wait in 1_u8..15,
    ) {
        let router = router(&network, params(velocity, wait));
        for itinerary in itineraries(&router, &network.stops) {
            let Some(journey) = itinerary.journey() else { continue };
            let summed: Duration = journey.segments.iter().map(Segment::duration).sum();
            prop_assert_eq!(summed, journey.total);
            if let Some(first) = journey.segments.first() {
                prop_assert!(matches!(first, Segment::Wait { .. }), "first segment is not a wait");
            }
            for pair in journey.segments.windows(2) {
                if let [Segment::Ride { .. }, next] = pair {
                    prop_assert!(matches!(next, Segment::Wait { .. }), "ride is not followed by a wait");
                }
            }
        }
    }

    #[test]
    fn wait_time_shifts_totals_within_bounds(
        network in network_strategy(6),
        wait in 1_u8..10,
        delta in 1_u8..10,
    ) {
        let before = router(&network, params(40.0, wait));
        let after = router(&network, params(40.0, wait + delta));
        let shift = Duration::from_secs(u64::from(delta) * 60);

        for (old, new) in itineraries(&before, &network.stops)
            .into_iter()
            .zip(itineraries(&after, &network.stops))
        {
            prop_assert_eq!(old.is_found(), new.is_found());
            let (Some(old), Some(new)) = (old.journey(), new.journey()) else { continue };
            if old.segments.is_empty() {
                prop_assert_eq!(new.total, Duration::ZERO);
                continue;
            }
            let waits = u32::try_from(old.wait_count()).expect("few waits");
            prop_assert!(new.total >= old.total + shift);
            prop_assert!(new.total <= old.total + shift * waits);
        }
    }

    #[test]
    fn linear_networks_have_symmetric_reachability(network in linear_network_strategy(6)) {
        let router = router(&network, params(40.0, 6));
        for from in &network.stops {
            for to in &network.stops {
                let there = router.find_route(from, to).expect("graph built");
                let back = router.find_route(to, from).expect("graph built");
                prop_assert_eq!(there.is_found(), back.is_found());
            }
        }
    }
}
