//! Directions provider client.
//!
//! This module provides an HTTP client for a Google-style Directions JSON
//! API, which returns driving routes between coordinates.
//!
//! Key characteristics of the provider:
//! - The HTTP status is 200 even for logical failures; the JSON `status`
//!   field (`OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...) carries the outcome
//! - Distances are in metres and durations in seconds, per leg
//! - Geometry is an encoded polyline in `overview_polyline.points`

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::convert_response;
pub use error::DirectionsError;
pub use mock::MockDirections;
pub use types::{DirectionsResponse, DirectionsRoute, OverviewPolyline, RouteLeg, ValueField};
