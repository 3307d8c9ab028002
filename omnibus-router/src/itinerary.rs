//! Query results: waits and rides between two stops.

use std::time::Duration;

/// One step of a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Segment {
    /// Wait at a stop for the next vehicle.
    Wait {
        /// Stop being waited at.
        stop: String,
        /// Configured wait time.
        duration: Duration,
    },
    /// Ride one route without getting off.
    Ride {
        /// Route ridden.
        route: String,
        /// Stop-to-stop legs covered by the ride.
        span_count: usize,
        /// Driving time.
        duration: Duration,
    },
}

impl Segment {
    /// Time spent on this segment.
    pub const fn duration(&self) -> Duration {
        match self {
            Self::Wait { duration, .. } | Self::Ride { duration, .. } => *duration,
        }
    }

    /// Time spent on this segment in minutes.
    pub fn minutes(&self) -> f64 {
        as_minutes(self.duration())
    }
}

/// A found itinerary: its total time and ordered segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Journey {
    /// Sum of all segment durations.
    pub total: Duration,
    /// Segments in travel order.
    pub segments: Vec<Segment>,
}

impl Journey {
    /// Total time in minutes.
    pub fn total_minutes(&self) -> f64 {
        as_minutes(self.total)
    }

    /// Number of wait segments.
    pub fn wait_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Wait { .. }))
            .count()
    }
}

#[expect(clippy::float_arithmetic, reason = "reporting unit conversion")]
fn as_minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / 60.0
}

/// Outcome of a route query.
///
/// "No route" is an ordinary answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "status", content = "journey", rename_all = "snake_case")
)]
pub enum Itinerary {
    /// No path connects the stops, or a stop is unknown.
    Unreachable,
    /// The fastest path.
    Found(Journey),
}

impl Itinerary {
    /// The journey, when one was found.
    pub const fn journey(&self) -> Option<&Journey> {
        match self {
            Self::Found(journey) => Some(journey),
            Self::Unreachable => None,
        }
    }

    /// Whether a path was found.
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
