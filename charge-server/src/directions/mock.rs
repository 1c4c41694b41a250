//! Mock directions provider for testing without API access.
//!
//! Serves a canned reply (a route, a provider status, or a transport
//! failure) and records every request so tests can assert how often the
//! provider was consulted.

use std::sync::{Arc, Mutex};

use crate::domain::{Coordinate, RouteInfo};
use crate::planner::RouteProvider;

use super::convert::convert_response;
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Canned reply served by the mock.
#[derive(Debug, Clone)]
enum Reply {
    Route(RouteInfo),
    Response(DirectionsResponse),
    Status(String),
    Timeout,
    Unreachable,
}

/// A recorded `(origin, waypoint, destination)` request.
pub type RecordedRequest = (Coordinate, Coordinate, Coordinate);

/// Mock directions provider.
#[derive(Clone)]
pub struct MockDirections {
    reply: Reply,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockDirections {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always return the given route.
    pub fn route(route: RouteInfo) -> Self {
        Self::with_reply(Reply::Route(route))
    }

    /// Serve a raw provider JSON body, converted exactly as the real client would.
    pub fn from_json(body: &str) -> Result<Self, DirectionsError> {
        let response: DirectionsResponse =
            serde_json::from_str(body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;
        Ok(Self::with_reply(Reply::Response(response)))
    }

    /// Answer with a non-OK provider status such as `OVER_QUERY_LIMIT`.
    pub fn status(status: impl Into<String>) -> Self {
        Self::with_reply(Reply::Status(status.into()))
    }

    /// Fail every request with a timeout.
    pub fn timeout() -> Self {
        Self::with_reply(Reply::Timeout)
    }

    /// Fail every request as if the network were down.
    pub fn unreachable() -> Self {
        Self::with_reply(Reply::Unreachable)
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl RouteProvider for MockDirections {
    async fn route_via(
        &self,
        origin: Coordinate,
        waypoint: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteInfo, DirectionsError> {
        if let Ok(mut guard) = self.requests.lock() {
            guard.push((origin, waypoint, destination));
        }

        match &self.reply {
            Reply::Route(route) => Ok(route.clone()),
            Reply::Response(response) => convert_response(response),
            Reply::Status(status) => Err(DirectionsError::Status {
                status: status.clone(),
                message: String::new(),
            }),
            Reply::Timeout => Err(DirectionsError::Timeout),
            Reply::Unreachable => Err(DirectionsError::Unreachable(
                "connection refused".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteSource;

    fn point(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[tokio::test]
    async fn records_requests() {
        let mock = MockDirections::route(RouteInfo {
            polyline: "abc".into(),
            duration_min: 10.0,
            distance_km: 12.0,
            source: RouteSource::Directions,
        });

        let route = mock
            .route_via(point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0))
            .await
            .unwrap();

        assert_eq!(route.polyline, "abc");
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.requests()[0].1, point(2.0, 2.0));
    }

    #[tokio::test]
    async fn serves_raw_json() {
        let mock = MockDirections::from_json(
            r#"{"status": "OK", "routes": [{"legs": [
                {"distance": {"value": 1000}, "duration": {"value": 60}}
            ], "overview_polyline": {"points": "xyz"}}]}"#,
        )
        .unwrap();

        let route = mock
            .route_via(point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0))
            .await
            .unwrap();
        assert_eq!(route.distance_km, 1.0);
        assert_eq!(route.duration_min, 1.0);
    }

    #[tokio::test]
    async fn failures() {
        let a = point(1.0, 1.0);

        let result = MockDirections::timeout().route_via(a, a, a).await;
        assert!(matches!(result, Err(DirectionsError::Timeout)));

        let result = MockDirections::unreachable().route_via(a, a, a).await;
        assert!(matches!(result, Err(DirectionsError::Unreachable(_))));

        let result = MockDirections::status("OVER_QUERY_LIMIT")
            .route_via(a, a, a)
            .await;
        assert!(matches!(result, Err(DirectionsError::Status { .. })));
    }
}
