//! Charge duration estimation.
//!
//! A trained predictor is consulted first. Any failure, including having
//! no predictor at all, falls back to a physics estimate of energy over
//! charger power. Estimation never fails.

use tracing::warn;

use crate::domain::{Station, TripRequest, round_to};
use crate::predictor::{ChargeFeatures, ChargePredictor, PredictError};

use super::config::PlannerConfig;

/// Estimates charge time per station for one request.
pub struct ChargeTimeEstimator<'a> {
    predictor: Option<&'a dyn ChargePredictor>,
    config: &'a PlannerConfig,
}

impl<'a> ChargeTimeEstimator<'a> {
    pub fn new(predictor: Option<&'a dyn ChargePredictor>, config: &'a PlannerConfig) -> Self {
        Self { predictor, config }
    }

    /// Estimated minutes to add `energy_needed_kwh` at `station`.
    ///
    /// Callers short-circuit to zero when no charge is needed; this
    /// method assumes there is something to charge.
    pub fn estimate(&self, station: &Station, request: &TripRequest, energy_needed_kwh: f64) -> f64 {
        if station.max_power_kw <= 0.0 {
            return self.config.unusable_charge_time_min;
        }

        match self.predict(station, request) {
            Ok(minutes) => round_to(minutes, 1),
            Err(PredictError::Unavailable) => physics_estimate(energy_needed_kwh, station.max_power_kw),
            Err(e) => {
                warn!(station = %station.id, error = %e, "charge predictor failed, using physics estimate");
                physics_estimate(energy_needed_kwh, station.max_power_kw)
            }
        }
    }

    fn predict(&self, station: &Station, request: &TripRequest) -> Result<f64, PredictError> {
        let predictor = self.predictor.ok_or(PredictError::Unavailable)?;

        let features = ChargeFeatures {
            current_soc: f64::from(request.current_soc),
            target_soc: f64::from(request.target_soc),
            battery_capacity_kwh: request.battery_capacity_kwh,
            charger_max_power: station.max_power_kw,
        };

        match predictor.predict(&features)? {
            m if !m.is_finite() => Err(PredictError::NonFinite(m)),
            m if m < 0.0 => Err(PredictError::Negative(m)),
            m => Ok(m),
        }
    }
}

/// Minutes to deliver `energy_kwh` at a constant `power_kw`.
pub fn physics_estimate(energy_kwh: f64, power_kw: f64) -> f64 {
    round_to(energy_kwh / power_kw * 60.0, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChargerType, Coordinate, SpeedPreference, StationId, StationStatus};

    struct Fixed(Result<f64, PredictError>);

    impl ChargePredictor for Fixed {
        fn predict(&self, _features: &ChargeFeatures) -> Result<f64, PredictError> {
            self.0.clone()
        }
    }

    fn station(power: f64) -> Station {
        Station::new(
            StationId::parse("st").unwrap(),
            "Test",
            Coordinate::new(3.0, 101.0).unwrap(),
            ChargerType::DcFast,
            power,
            StationStatus::Available,
        )
    }

    fn request() -> TripRequest {
        TripRequest::new(
            Coordinate::new(3.0, 101.0).unwrap(),
            Coordinate::new(4.0, 101.0).unwrap(),
            20,
            80,
            60.0,
            SpeedPreference::Any,
        )
        .unwrap()
    }

    #[test]
    fn physics_when_no_predictor() {
        let config = PlannerConfig::default();
        let estimator = ChargeTimeEstimator::new(None, &config);
        // 36 kWh at 50 kW = 43.2 minutes
        assert_eq!(estimator.estimate(&station(50.0), &request(), 36.0), 43.2);
    }

    #[test]
    fn predictor_result_is_rounded() {
        let config = PlannerConfig::default();
        let predictor = Fixed(Ok(31.46));
        let estimator = ChargeTimeEstimator::new(Some(&predictor), &config);
        assert_eq!(estimator.estimate(&station(50.0), &request(), 36.0), 31.5);
    }

    #[test]
    fn predictor_failure_falls_back() {
        let config = PlannerConfig::default();
        let predictor = Fixed(Err(PredictError::Model("boom".into())));
        let estimator = ChargeTimeEstimator::new(Some(&predictor), &config);
        assert_eq!(estimator.estimate(&station(120.0), &request(), 36.0), 18.0);
    }

    #[test]
    fn non_finite_prediction_falls_back() {
        let config = PlannerConfig::default();
        let predictor = Fixed(Err(PredictError::NonFinite(f64::INFINITY)));
        let estimator = ChargeTimeEstimator::new(Some(&predictor), &config);
        assert_eq!(estimator.estimate(&station(50.0), &request(), 36.0), 43.2);
    }

    #[test]
    fn nonsense_prediction_is_rejected() {
        let config = PlannerConfig::default();
        for value in [f64::NAN, -5.0] {
            let predictor = Fixed(Ok(value));
            let estimator = ChargeTimeEstimator::new(Some(&predictor), &config);
            assert_eq!(estimator.estimate(&station(50.0), &request(), 36.0), 43.2);
        }
    }

    #[test]
    fn zero_power_saturates() {
        let config = PlannerConfig::default();
        let predictor = Fixed(Ok(10.0));
        let estimator = ChargeTimeEstimator::new(Some(&predictor), &config);
        assert_eq!(estimator.estimate(&station(0.0), &request(), 36.0), 999.0);
        assert_eq!(estimator.estimate(&station(-7.0), &request(), 36.0), 999.0);
    }
}
