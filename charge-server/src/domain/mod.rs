//! Domain types for the charging-stop planner.
//!
//! This module contains the core value types that represent validated
//! trip and station data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod geo;
mod route;
mod station;
mod trip;

pub use error::DomainError;
pub use geo::{Coordinate, EARTH_RADIUS_KM, distance, midpoint};
pub use route::{RouteInfo, RouteSource, round_to};
pub use station::{ChargerType, Station, StationId, StationStatus};
pub use trip::{SpeedPreference, TripRequest};
