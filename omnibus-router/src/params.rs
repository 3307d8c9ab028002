//! Vehicle velocity and stop wait time.

use std::time::Duration;

use thiserror::Error;

/// Errors returned by [`RoutingParams::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RoutingParamsError {
    /// Velocity was not a finite positive number.
    #[error("vehicle velocity must be finite and positive, got {0} km/h")]
    InvalidVelocity(f64),
    /// Wait time was negative or not finite.
    #[error("wait time must be finite and non-negative, got {0} min")]
    InvalidWaitTime(f64),
}

/// Parameters that determine every edge weight of the routing graph.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use omnibus_router::RoutingParams;
///
/// # fn main() -> Result<(), omnibus_router::RoutingParamsError> {
/// let params = RoutingParams::new(40.0, 6.0)?;
/// assert_eq!(params.wait_time(), Duration::from_secs(360));
/// assert_eq!(params.travel_time(1_800), Duration::from_secs(162));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingParams {
    velocity_kmh: f64,
    wait_minutes: f64,
}

impl RoutingParams {
    /// Validate and construct parameters from km/h and minutes.
    pub fn new(velocity_kmh: f64, wait_minutes: f64) -> Result<Self, RoutingParamsError> {
        if !velocity_kmh.is_finite() || velocity_kmh <= 0.0 {
            return Err(RoutingParamsError::InvalidVelocity(velocity_kmh));
        }
        if !wait_minutes.is_finite() || wait_minutes < 0.0 {
            return Err(RoutingParamsError::InvalidWaitTime(wait_minutes));
        }
        Ok(Self {
            velocity_kmh,
            wait_minutes,
        })
    }

    /// Vehicle velocity in km/h.
    pub const fn velocity_kmh(&self) -> f64 {
        self.velocity_kmh
    }

    /// Wait time at a stop in minutes.
    pub const fn wait_minutes(&self) -> f64 {
        self.wait_minutes
    }

    /// Weight of every wait edge.
    #[expect(clippy::float_arithmetic, reason = "minutes convert to seconds")]
    pub fn wait_time(&self) -> Duration {
        saturating_secs(self.wait_minutes * 60.0)
    }

    /// Time to drive `metres` of road at the configured velocity.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "road distance over velocity is a floating-point ratio"
    )]
    pub fn travel_time(&self, metres: u64) -> Duration {
        // metres / (km/h) * 3.6 = seconds
        saturating_secs(metres as f64 * 3.6 / self.velocity_kmh)
    }
}

fn saturating_secs(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}
