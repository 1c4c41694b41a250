//! Tuning constants for the charging-stop planner.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration parameters for trip planning.
///
/// Every field has a default, so a JSON override file only needs to name
/// the constants it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Average energy consumption (kWh per km).
    pub consumption_kwh_per_km: f64,

    /// Share of battery capacity held back as a range reserve.
    pub reserve_fraction: f64,

    /// Floor for the safe driveable range (km).
    pub min_safe_range_km: f64,

    /// Standard-tier stations must lie within this distance of the trip
    /// midpoint (km).
    pub midpoint_radius_km: f64,

    /// Minimum station power for the `fast` preference (kW).
    pub fast_min_power_kw: f64,

    /// Minimum station power for the `ultrafast` preference (kW).
    pub ultrafast_min_power_kw: f64,

    /// Weight of charge minutes in the score.
    pub time_weight: f64,

    /// Score added for a station that is not `Available`.
    pub unavailable_penalty: f64,

    /// Stations at or above this power earn the bonus (kW).
    pub high_power_threshold_kw: f64,

    /// Score subtracted for high-power stations.
    pub high_power_bonus: f64,

    /// Maximum number of options returned.
    pub max_results: usize,

    /// Charge time reported for a station with no usable power (minutes).
    pub unusable_charge_time_min: f64,

    /// Average speed for simulated routes (km/h).
    pub simulated_speed_kmh: f64,

    /// Tariff for AC chargers (per kWh).
    pub ac_rate: f64,

    /// Tariff for DC chargers below the high-power threshold (per kWh).
    pub dc_rate: f64,

    /// Tariff for DC chargers at or above the high-power threshold (per kWh).
    pub dc_high_power_rate: f64,

    /// DC power at which the higher tariff applies (kW).
    pub dc_high_power_threshold_kw: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            consumption_kwh_per_km: 0.2,
            reserve_fraction: 0.05,
            min_safe_range_km: 10.0,
            midpoint_radius_km: 100.0,
            fast_min_power_kw: 50.0,
            ultrafast_min_power_kw: 100.0,
            time_weight: 0.5,
            unavailable_penalty: 200.0,
            high_power_threshold_kw: 120.0,
            high_power_bonus: 15.0,
            max_results: 5,
            unusable_charge_time_min: 999.0,
            simulated_speed_kmh: 80.0,
            ac_rate: 1.00,
            dc_rate: 1.40,
            dc_high_power_rate: 1.60,
            dc_high_power_threshold_kw: 100.0,
        }
    }
}

/// Failure loading a configuration override file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read planner config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse planner config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid planner config: {0}")]
    Invalid(&'static str),
}

impl PlannerConfig {
    /// Load overrides from a JSON file, defaulting unnamed fields.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: PlannerConfig =
            serde_json::from_str(&json).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make range or speed arithmetic meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.consumption_kwh_per_km > 0.0) {
            return Err(ConfigError::Invalid("consumption_kwh_per_km must be positive"));
        }
        if !(self.simulated_speed_kmh > 0.0) {
            return Err(ConfigError::Invalid("simulated_speed_kmh must be positive"));
        }
        if self.max_results == 0 {
            return Err(ConfigError::Invalid("max_results must be at least 1"));
        }
        Ok(())
    }
}
