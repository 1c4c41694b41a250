//! Directions HTTP client.
//!
//! Provides an async method for fetching a driving route through a single
//! waypoint and converting it to a route summary.

use tracing::debug;

use crate::domain::{Coordinate, RouteInfo};
use crate::planner::RouteProvider;

use super::convert::convert_response;
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default endpoint for the Google Directions JSON API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Endpoint URL (defaults to production Google Directions)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DirectionsClient {
    /// Create a new directions client with the given configuration.
    ///
    /// An empty API key is rejected: without a credential the planner
    /// should not hold a client at all and will simulate routes instead.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        if config.api_key.trim().is_empty() {
            return Err(DirectionsError::NotConfigured(
                "directions API key is empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(DirectionsError::Http)?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Get a driving route from `origin` to `destination` via `waypoint`.
    pub async fn get_route(
        &self,
        origin: Coordinate,
        waypoint: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteInfo, DirectionsError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("origin", origin.to_string()),
                ("destination", destination.to_string()),
                ("waypoints", waypoint.to_string()),
                ("mode", "driving".to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Err(DirectionsError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        debug!(
            status = %parsed.status,
            routes = parsed.routes.len(),
            "directions response"
        );

        convert_response(&parsed)
    }
}

impl RouteProvider for DirectionsClient {
    async fn route_via(
        &self,
        origin: Coordinate,
        waypoint: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteInfo, DirectionsError> {
        self.get_route(origin, waypoint, destination).await
    }
}
