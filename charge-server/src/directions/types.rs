//! Directions API response DTOs.
//!
//! These types map directly to the provider's JSON. Fields we never read
//! are left out; fields the provider omits on failure are defaulted.

use serde::Deserialize;

/// Top-level directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Logical outcome, e.g. `OK` or `ZERO_RESULTS`.
    pub status: String,

    /// Human-readable explanation on failure.
    pub error_message: Option<String>,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

/// One route alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    /// One leg per origin/waypoint/destination hop.
    #[serde(default)]
    pub legs: Vec<RouteLeg>,

    /// Simplified geometry of the whole route.
    pub overview_polyline: OverviewPolyline,
}

/// A leg between two consecutive stops.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteLeg {
    /// Leg distance in metres.
    pub distance: ValueField,

    /// Leg duration in seconds.
    pub duration: ValueField,
}

/// A `{ "text": ..., "value": ... }` pair; only the value is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueField {
    pub value: f64,
}

/// Encoded polyline wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct OverviewPolyline {
    pub points: String,
}
