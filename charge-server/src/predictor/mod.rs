//! Trained charge-duration predictors.
//!
//! The planner only consumes a predictor; training happens offline. A
//! predictor is shared read-only across requests, so implementations must
//! be `Send + Sync` and must not mutate themselves while predicting.

mod error;
mod linear;

pub use error::{ModelLoadError, PredictError};
pub use linear::{FeatureWeights, LinearChargeModel};

use serde::Serialize;

/// Input features for a charge-duration prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargeFeatures {
    pub current_soc: f64,
    pub target_soc: f64,
    pub battery_capacity_kwh: f64,
    pub charger_max_power: f64,
}

/// A model that predicts charging time in minutes.
pub trait ChargePredictor: Send + Sync {
    /// Predict the charge duration in minutes for the given features.
    fn predict(&self, features: &ChargeFeatures) -> Result<f64, PredictError>;
}
