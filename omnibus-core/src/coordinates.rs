//! Geographic coordinates and great-circle distance.

use geo::{Coord, Point};

/// Earth radius used by [`Coordinates::distance`], in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
///
/// Converting into [`geo::Coord`] follows the WGS84 convention used across
/// the `geo` ecosystem: `x = longitude`, `y = latitude`.
///
/// # Examples
/// ```
/// use omnibus_core::Coordinates;
///
/// let equator = Coordinates::new(0.0, 0.0);
/// let north = Coordinates::new(1.0, 0.0);
/// let metres = Coordinates::distance(equator, north);
/// assert!((metres - 111_194.926_644_558_73).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Construct coordinates from degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance between `from` and `to` in metres.
    ///
    /// Uses the haversine formula with [`EARTH_RADIUS_METRES`].
    #[expect(
        clippy::float_arithmetic,
        reason = "haversine distance is inherently floating-point"
    )]
    pub fn distance(from: Self, to: Self) -> f64 {
        let lat_from = from.latitude.to_radians();
        let lat_to = to.latitude.to_radians();
        let half_dlat = (to.latitude - from.latitude).to_radians() / 2.0;
        let half_dlon = (to.longitude - from.longitude).to_radians() / 2.0;

        let a = half_dlat.sin().powi(2) + lat_from.cos() * lat_to.cos() * half_dlon.sin().powi(2);
        2.0 * EARTH_RADIUS_METRES * a.sqrt().min(1.0).asin()
    }

    /// Great-circle distance from `self` to `other` in metres.
    pub fn distance_to(self, other: Self) -> f64 {
        Self::distance(self, other)
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(value: Coordinates) -> Self {
        Self {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(value: Coordinates) -> Self {
        Point(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-6;

    #[rstest]
    fn default_is_origin() {
        let origin = Coordinates::default();
        assert_eq!(origin.latitude(), 0.0);
        assert_eq!(origin.longitude(), 0.0);
    }

    #[rstest]
    #[case(55.611_087, 37.208_29)]
    #[case(-23.595_884, -13.209_755)]
    fn preserves_components(#[case] latitude: f64, #[case] longitude: f64) {
        let coords = Coordinates::new(latitude, longitude);
        assert_eq!(coords.latitude(), latitude);
        assert_eq!(coords.longitude(), longitude);
    }

    #[rstest]
    fn same_point_has_zero_distance() {
        let point = Coordinates::new(55.6, 37.6);
        assert!(Coordinates::distance(point, point).abs() < TOLERANCE);
    }

    #[rstest]
    fn one_degree_of_latitude_matches_arc_length() {
        let expected = EARTH_RADIUS_METRES * std::f64::consts::PI / 180.0;
        let metres = Coordinates::distance(Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 0.0));
        assert!((metres - expected).abs() < TOLERANCE);
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Coordinates::new(55.611_087, 37.208_29);
        let b = Coordinates::new(55.595_884, 37.209_755);
        let forward = a.distance_to(b);
        let backward = b.distance_to(a);
        assert!((forward - backward).abs() < TOLERANCE);
        assert!(forward > 1_600.0 && forward < 1_800.0);
    }

    #[rstest]
    fn converts_to_geo_coord_as_lon_lat() {
        let coord: Coord<f64> = Coordinates::new(55.6, 37.6).into();
        assert_eq!(coord, Coord { x: 37.6, y: 55.6 });
    }
}
