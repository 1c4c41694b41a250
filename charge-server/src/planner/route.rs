//! Driving route for the chosen stop.
//!
//! The directions provider is asked once, for the best candidate only. If
//! there is no provider, or it fails in any way, a simulated route is
//! built from two straight-line legs so the response always carries a
//! decodable polyline.

use std::future::Future;

use tracing::{debug, warn};

use crate::directions::DirectionsError;
use crate::domain::{Coordinate, RouteInfo, RouteSource, round_to};
use crate::polyline;

use super::config::PlannerConfig;

/// Source of real driving routes.
///
/// This abstraction allows the planner to be tested with mock data.
pub trait RouteProvider: Send + Sync {
    /// Driving route from `origin` to `destination` through `waypoint`.
    fn route_via(
        &self,
        origin: Coordinate,
        waypoint: Coordinate,
        destination: Coordinate,
    ) -> impl Future<Output = Result<RouteInfo, DirectionsError>> + Send;
}

/// Placeholder provider for planners with no routing credential.
///
/// Never consulted: a planner holding it has no provider configured.
pub struct Offline;

impl RouteProvider for Offline {
    async fn route_via(
        &self,
        _origin: Coordinate,
        _waypoint: Coordinate,
        _destination: Coordinate,
    ) -> Result<RouteInfo, DirectionsError> {
        Err(DirectionsError::NotConfigured(
            "no directions provider".to_string(),
        ))
    }
}

/// Build a three-point route from straight-line legs at a fixed speed.
pub fn simulate_route(
    start: Coordinate,
    stop: Coordinate,
    end: Coordinate,
    config: &PlannerConfig,
) -> RouteInfo {
    let distance_km = start.distance_to(&stop) + stop.distance_to(&end);
    let duration_min = distance_km / config.simulated_speed_kmh * 60.0;

    RouteInfo {
        polyline: polyline::encode(&[start, stop, end]),
        duration_min: round_to(duration_min, 1),
        distance_km: round_to(distance_km, 1),
        source: RouteSource::Simulated,
    }
}

/// Fetches the route for the top candidate, degrading to simulation.
pub struct RouteFetcher<'a, R: RouteProvider> {
    provider: Option<&'a R>,
    config: &'a PlannerConfig,
}

impl<'a, R: RouteProvider> RouteFetcher<'a, R> {
    pub fn new(provider: Option<&'a R>, config: &'a PlannerConfig) -> Self {
        Self { provider, config }
    }

    /// Route from `start` to `end` via `stop`. Never fails.
    pub async fn fetch(&self, start: Coordinate, stop: Coordinate, end: Coordinate) -> RouteInfo {
        let Some(provider) = self.provider else {
            debug!("no directions provider configured, simulating route");
            return simulate_route(start, stop, end, self.config);
        };

        match provider.route_via(start, stop, end).await {
            Ok(route) => route,
            Err(e) => {
                warn!(error = %e, "directions lookup failed, simulating route");
                simulate_route(start, stop, end, self.config)
            }
        }
    }
}
