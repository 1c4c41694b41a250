//! Great-circle geometry on a spherical Earth.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use charge_server::domain::Coordinate;
///
/// let klcc = Coordinate::new(3.1578, 101.7117).unwrap();
/// assert_eq!(klcc.lat, 3.1578);
///
/// // Latitude beyond the poles is rejected
/// assert!(Coordinate::new(90.5, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a validated coordinate.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);

        if !valid {
            return Err(DomainError::InvalidCoordinate { lat, lon });
        }

        Ok(Self { lat, lon })
    }

    /// Great-circle distance to another coordinate in kilometres.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance(self.lat, self.lon, other.lat, other.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Haversine distance in kilometres between two points given in degrees.
///
/// Symmetric in its arguments and zero for identical points.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let sin_dphi = (dphi / 2.0).sin();
    let sin_dlambda = (dlambda / 2.0).sin();

    let h = sin_dphi * sin_dphi + phi1.cos() * phi2.cos() * sin_dlambda * sin_dlambda;
    // Rounding can push h fractionally above 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * h.min(1.0).sqrt().asin()
}

/// Arithmetic midpoint of two coordinates.
///
/// Trips are regional, so averaging degrees is close enough to the
/// geodesic midpoint for picking stations "half way".
pub fn midpoint(a: &Coordinate, b: &Coordinate) -> Coordinate {
    Coordinate {
        lat: (a.lat + b.lat) / 2.0,
        lon: (a.lon + b.lon) / 2.0,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0,
            lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0,
            lon2 in -180.0f64..=180.0,
        ) {
            let ab = distance(lat1, lon1, lat2, lon2);
            let ba = distance(lat2, lon2, lat1, lon1);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        #[test]
        fn distance_to_self_is_zero(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert_eq!(distance(lat, lon, lat, lon), 0.0);
        }

        #[test]
        fn distance_is_bounded_by_half_circumference(
            lat1 in -90.0f64..=90.0,
            lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0,
            lon2 in -180.0f64..=180.0,
        ) {
            let d = distance(lat1, lon1, lat2, lon2);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
