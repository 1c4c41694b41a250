//! Driving route summary.

use serde::Serialize;

/// Where a route came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSource {
    /// Returned by the external directions provider
    Directions,
    /// Built locally from straight-line legs
    Simulated,
}

/// The driving route for a trip via its charging stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteInfo {
    /// Encoded polyline of the whole route.
    pub polyline: String,
    /// Total driving time in minutes.
    pub duration_min: f64,
    /// Total driving distance in kilometres.
    pub distance_km: f64,
    pub source: RouteSource,
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round_to(43.2499, 1), 43.2);
        assert_eq!(round_to(43.25, 1), 43.3);
        assert_eq!(round_to(57.599999, 2), 57.6);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RouteSource::Simulated).unwrap(),
            "\"simulated\""
        );
    }
}
