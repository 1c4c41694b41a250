//! Caching layer for directions lookups.
//!
//! Planning the same trip twice asks the provider for the same route via
//! the same stop. Coordinates are snapped to a fixed grid (4 decimal places,
//! roughly 11 m) so near-identical requests share an entry. Only successful
//! lookups are cached; failures fall through to simulation every time.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::directions::{DirectionsClient, DirectionsError};
use crate::domain::{Coordinate, RouteInfo};
use crate::planner::RouteProvider;

/// A coordinate snapped to the cache grid.
type GridPoint = (i64, i64);

/// Cache key for routes: (origin, waypoint, destination) on the grid.
type RouteKey = (GridPoint, GridPoint, GridPoint);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Decimal places kept when snapping coordinates.
    pub precision: u8,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
            precision: 4,
        }
    }
}

/// Cache of routes keyed by snapped coordinates.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteInfo>,
    scale: f64,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            routes,
            scale: 10f64.powi(i32::from(config.precision)),
        }
    }

    fn snap(&self, point: Coordinate) -> GridPoint {
        (
            (point.lat * self.scale).round() as i64,
            (point.lon * self.scale).round() as i64,
        )
    }

    /// Compute the key for a routed request.
    fn key(&self, origin: Coordinate, waypoint: Coordinate, destination: Coordinate) -> RouteKey {
        (self.snap(origin), self.snap(waypoint), self.snap(destination))
    }

    pub async fn get(&self, key: &RouteKey) -> Option<RouteInfo> {
        self.routes.get(key).await
    }

    pub async fn insert(&self, key: RouteKey, route: RouteInfo) {
        self.routes.insert(key, route).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// Directions provider with caching.
///
/// Wraps any `RouteProvider`, normally the live `DirectionsClient`.
pub struct CachedDirectionsClient<R = DirectionsClient> {
    inner: R,
    cache: RouteCache,
}

impl<R: RouteProvider> CachedDirectionsClient<R> {
    /// Create a new cached provider.
    pub fn new(inner: R, cache_config: &CacheConfig) -> Self {
        Self {
            inner,
            cache: RouteCache::new(cache_config),
        }
    }

    /// Access the underlying provider for lookups that bypass the cache.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

impl<R: RouteProvider> RouteProvider for CachedDirectionsClient<R> {
    async fn route_via(
        &self,
        origin: Coordinate,
        waypoint: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteInfo, DirectionsError> {
        let key = self.cache.key(origin, waypoint, destination);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let route = self
            .inner
            .route_via(origin, waypoint, destination)
            .await?;

        self.cache.insert(key, route.clone()).await;

        Ok(route)
    }
}
