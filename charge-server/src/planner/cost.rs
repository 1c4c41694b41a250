//! Charging cost from tariff bands.

use crate::domain::{ChargerType, Station, round_to};

use super::config::PlannerConfig;

/// Per-kWh tariff for a station.
///
/// AC chargers use the flat AC rate; DC chargers are split at the
/// high-power threshold.
pub fn tariff_rate(station: &Station, config: &PlannerConfig) -> f64 {
    match station.charger_type {
        ChargerType::Ac => config.ac_rate,
        ChargerType::DcFast if station.max_power_kw >= config.dc_high_power_threshold_kw => {
            config.dc_high_power_rate
        }
        ChargerType::DcFast => config.dc_rate,
    }
}

/// Estimated cost of adding `energy_needed_kwh`, rounded to cents.
pub fn estimate_cost(energy_needed_kwh: f64, station: &Station, config: &PlannerConfig) -> f64 {
    round_to(energy_needed_kwh * tariff_rate(station, config), 2)
}
