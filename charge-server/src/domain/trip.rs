//! Trip request types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::DomainError;
use super::geo::Coordinate;

/// Minimum charger speed the driver is willing to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedPreference {
    #[default]
    Any,
    Fast,
    Ultrafast,
}

impl SpeedPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedPreference::Any => "any",
            SpeedPreference::Fast => "fast",
            SpeedPreference::Ultrafast => "ultrafast",
        }
    }
}

impl FromStr for SpeedPreference {
    type Err = std::convert::Infallible;

    /// Case-insensitive. Anything unrecognised means no preference.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "fast" => SpeedPreference::Fast,
            "ultrafast" | "ultra_fast" | "ultra-fast" => SpeedPreference::Ultrafast,
            _ => SpeedPreference::Any,
        })
    }
}

impl fmt::Display for SpeedPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated request for a charging stop along a trip.
///
/// `target_soc` is normally above `current_soc` but this is not required;
/// a request that is already charged enough simply needs no energy.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub start: Coordinate,
    pub end: Coordinate,
    pub current_soc: u8,
    pub target_soc: u8,
    pub battery_capacity_kwh: f64,
    pub preference: SpeedPreference,
}

impl TripRequest {
    /// Create a new trip request, validating SOC and capacity.
    pub fn new(
        start: Coordinate,
        end: Coordinate,
        current_soc: u8,
        target_soc: u8,
        battery_capacity_kwh: f64,
        preference: SpeedPreference,
    ) -> Result<Self, DomainError> {
        if current_soc > 100 {
            return Err(DomainError::InvalidSoc {
                field: "current_soc",
                value: current_soc,
            });
        }
        if target_soc > 100 {
            return Err(DomainError::InvalidSoc {
                field: "target_soc",
                value: target_soc,
            });
        }
        if !battery_capacity_kwh.is_finite() || battery_capacity_kwh <= 0.0 {
            return Err(DomainError::InvalidCapacity(battery_capacity_kwh));
        }

        Ok(Self {
            start,
            end,
            current_soc,
            target_soc,
            battery_capacity_kwh,
            preference,
        })
    }

    /// Whether the battery already holds at least the target charge.
    pub fn needs_no_charge(&self) -> bool {
        self.current_soc >= self.target_soc
    }
}
