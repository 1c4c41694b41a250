//! Conversion from directions DTOs to a route summary.

use crate::domain::{RouteInfo, RouteSource, round_to};

use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Convert a provider response into a route summary.
///
/// Uses the first route. Distances and durations are summed across all of
/// its legs (origin → waypoint → destination gives two); the overview
/// polyline is passed through untouched.
pub fn convert_response(response: &DirectionsResponse) -> Result<RouteInfo, DirectionsError> {
    if response.status != "OK" {
        return Err(DirectionsError::Status {
            status: response.status.clone(),
            message: response.error_message.clone().unwrap_or_default(),
        });
    }

    let route = response.routes.first().ok_or(DirectionsError::NoRoutes)?;

    let metres: f64 = route.legs.iter().map(|leg| leg.distance.value).sum();
    let seconds: f64 = route.legs.iter().map(|leg| leg.duration.value).sum();

    Ok(RouteInfo {
        polyline: route.overview_polyline.points.clone(),
        duration_min: round_to(seconds / 60.0, 1),
        distance_km: round_to(metres / 1000.0, 1),
        source: RouteSource::Directions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DirectionsResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn sums_all_legs() {
        let response = parse(
            r#"{
            "status": "OK",
            "routes": [{
                "legs": [
                    {"distance": {"value": 120500}, "duration": {"value": 4800}},
                    {"distance": {"value": 180250}, "duration": {"value": 7230}}
                ],
                "overview_polyline": {"points": "abc"}
            }]
        }"#,
        );

        let route = convert_response(&response).unwrap();
        assert_eq!(route.distance_km, 300.8);
        assert_eq!(route.duration_min, 200.5);
        assert_eq!(route.polyline, "abc");
        assert_eq!(route.source, RouteSource::Directions);
    }

    #[test]
    fn non_ok_status_is_an_error() {
        let response = parse(r#"{"status": "ZERO_RESULTS", "routes": []}"#);
        let err = convert_response(&response).unwrap_err();
        assert!(matches!(err, DirectionsError::Status { ref status, .. } if status == "ZERO_RESULTS"));
    }

    #[test]
    fn ok_without_routes_is_an_error() {
        let response = parse(r#"{"status": "OK", "routes": []}"#);
        assert!(matches!(
            convert_response(&response),
            Err(DirectionsError::NoRoutes)
        ));
    }
}
