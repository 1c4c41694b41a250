//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from API/IO errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180]
    #[error("invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// State of charge above 100 percent
    #[error("invalid {field}: {value}% (must be 0-100)")]
    InvalidSoc { field: &'static str, value: u8 },

    /// Battery capacity must be a positive, finite number of kWh
    #[error("invalid battery capacity: {0} kWh")]
    InvalidCapacity(f64),

    /// Unrecognised charger type string
    #[error("unknown charger type: {0}")]
    UnknownChargerType(String),

    /// Unrecognised station status string
    #[error("unknown station status: {0}")]
    UnknownStatus(String),

    /// Station with an empty identifier
    #[error("station id must not be empty")]
    EmptyStationId,
}
