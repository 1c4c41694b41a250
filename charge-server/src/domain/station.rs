//! Charging station types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::geo::Coordinate;

/// Opaque station identifier, unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier. Surrounding whitespace is trimmed.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyStationId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Charger class, which determines the tariff band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargerType {
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "DC Fast")]
    DcFast,
}

impl ChargerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargerType::Ac => "AC",
            ChargerType::DcFast => "DC Fast",
        }
    }
}

impl FromStr for ChargerType {
    type Err = DomainError;

    /// Accepts the canonical names plus the spellings seen in operator feeds
    /// ("Level 2", "DC Fast Charger", "DC").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ac" | "level 2" | "type 2" => Ok(ChargerType::Ac),
            "dc" | "dc fast" | "dc fast charger" | "ccs2" => Ok(ChargerType::DcFast),
            _ => Err(DomainError::UnknownChargerType(s.to_string())),
        }
    }
}

impl fmt::Display for ChargerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live availability of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationStatus {
    Available,
    Busy,
    Charging,
    Offline,
    Unknown,
}

impl StationStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, StationStatus::Available)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Available => "Available",
            StationStatus::Busy => "Busy",
            StationStatus::Charging => "Charging",
            StationStatus::Offline => "Offline",
            StationStatus::Unknown => "Unknown",
        }
    }
}

impl FromStr for StationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(StationStatus::Available),
            "busy" | "occupied" => Ok(StationStatus::Busy),
            "charging" => Ok(StationStatus::Charging),
            "offline" | "out of service" => Ok(StationStatus::Offline),
            "unknown" => Ok(StationStatus::Unknown),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A charging station in the catalog.
///
/// Stations are immutable once loaded. `max_power_kw` is not required to be
/// positive: a zero-power record is a degenerate but valid entry that the
/// charge-time estimator treats as effectively unusable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub location: Coordinate,
    pub charger_type: ChargerType,
    pub max_power_kw: f64,
    pub status: StationStatus,
}

impl Station {
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        location: Coordinate,
        charger_type: ChargerType,
        max_power_kw: f64,
        status: StationStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            charger_type,
            max_power_kw,
            status,
        }
    }

    /// Great-circle distance from this station to a point.
    pub fn distance_to(&self, point: &Coordinate) -> f64 {
        self.location.distance_to(point)
    }
}
