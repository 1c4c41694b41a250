//! Battery range model.
//!
//! Converts the battery state of a trip request into a safe driveable
//! radius and the energy that must be added to reach the target charge.

use serde::Serialize;

use crate::domain::TripRequest;

use super::config::PlannerConfig;

/// Range and energy figures derived from a trip request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeEstimate {
    /// Energy currently in the battery (kWh).
    pub current_kwh: f64,
    /// Distance the current charge covers at average consumption (km).
    pub max_range_km: f64,
    /// Reachable distance after holding back the reserve (km), never
    /// below the configured floor.
    pub safe_range_km: f64,
    /// Energy to add to reach the target SOC (kWh), never negative.
    pub energy_needed_kwh: f64,
}

/// Compute the range estimate for a request.
pub fn estimate_range(request: &TripRequest, config: &PlannerConfig) -> RangeEstimate {
    let capacity = request.battery_capacity_kwh;
    let consumption = config.consumption_kwh_per_km;

    let current_kwh = f64::from(request.current_soc) / 100.0 * capacity;
    let max_range_km = current_kwh / consumption;
    let reserve_km = config.reserve_fraction * capacity / consumption;
    let safe_range_km = (max_range_km - reserve_km).max(config.min_safe_range_km);

    let soc_gap = f64::from(request.target_soc) - f64::from(request.current_soc);
    let energy_needed_kwh = (soc_gap / 100.0 * capacity).max(0.0);

    RangeEstimate {
        current_kwh,
        max_range_km,
        safe_range_km,
        energy_needed_kwh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, SpeedPreference};

    fn request(current: u8, target: u8, capacity: f64) -> TripRequest {
        TripRequest::new(
            Coordinate::new(3.1485, 101.7131).unwrap(),
            Coordinate::new(5.4375, 100.3099).unwrap(),
            current,
            target,
            capacity,
            SpeedPreference::Any,
        )
        .unwrap()
    }

    #[test]
    fn typical_trip() {
        // 20% of 60 kWh = 12 kWh → 60 km; reserve 3 kWh = 15 km
        let range = estimate_range(&request(20, 80, 60.0), &PlannerConfig::default());
        assert!((range.current_kwh - 12.0).abs() < 1e-9);
        assert!((range.max_range_km - 60.0).abs() < 1e-9);
        assert!((range.safe_range_km - 45.0).abs() < 1e-9);
        assert!((range.energy_needed_kwh - 36.0).abs() < 1e-9);
    }

    #[test]
    fn empty_battery_hits_floor() {
        let range = estimate_range(&request(0, 80, 60.0), &PlannerConfig::default());
        assert_eq!(range.safe_range_km, 10.0);
    }

    #[test]
    fn no_energy_needed_when_already_charged() {
        let range = estimate_range(&request(80, 80, 60.0), &PlannerConfig::default());
        assert_eq!(range.energy_needed_kwh, 0.0);

        let range = estimate_range(&request(90, 40, 60.0), &PlannerConfig::default());
        assert_eq!(range.energy_needed_kwh, 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Coordinate, SpeedPreference};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn safe_range_never_below_floor(
            current in 0u8..=100,
            target in 0u8..=100,
            capacity in 0.1f64..500.0,
        ) {
            let request = TripRequest::new(
                Coordinate::new(0.0, 0.0).unwrap(),
                Coordinate::new(1.0, 1.0).unwrap(),
                current,
                target,
                capacity,
                SpeedPreference::Any,
            )
            .unwrap();
            let range = estimate_range(&request, &PlannerConfig::default());
            prop_assert!(range.safe_range_km >= 10.0);
            prop_assert!(range.energy_needed_kwh >= 0.0);
            if current >= target {
                prop_assert_eq!(range.energy_needed_kwh, 0.0);
            }
        }
    }
}
