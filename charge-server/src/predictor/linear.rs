//! Linear regression charge model persisted as JSON.
//!
//! The model file looks like:
//!
//! ```json
//! {
//!   "name": "charge_model_v3",
//!   "intercept": 4.2,
//!   "weights": {
//!     "current_soc": -0.05,
//!     "target_soc": 0.12,
//!     "battery_capacity_kwh": 0.08,
//!     "charger_max_power": -0.02,
//!     "energy_over_power": 55.0
//!   }
//! }
//! ```
//!
//! `energy_over_power` weights the engineered feature
//! `(target_soc - current_soc) / 100 * capacity / power` (hours at full
//! power), which carries most of the signal.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ModelLoadError, PredictError};
use super::{ChargeFeatures, ChargePredictor};

/// Per-feature coefficients.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureWeights {
    pub current_soc: f64,
    pub target_soc: f64,
    pub battery_capacity_kwh: f64,
    pub charger_max_power: f64,
    pub energy_over_power: f64,
}

/// A trained linear model for charge duration in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearChargeModel {
    pub name: String,
    pub intercept: f64,
    pub weights: FeatureWeights,
}

impl LinearChargeModel {
    pub fn new(name: impl Into<String>, intercept: f64, weights: FeatureWeights) -> Self {
        Self {
            name: name.into(),
            intercept,
            weights,
        }
    }

    /// Load a model from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();

        let json = fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let model: LinearChargeModel =
            serde_json::from_str(&json).map_err(|source| ModelLoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        if !model.is_finite() {
            return Err(ModelLoadError::Invalid {
                path: path.to_path_buf(),
                message: "intercept and weights must be finite".to_string(),
            });
        }

        Ok(model)
    }

    fn is_finite(&self) -> bool {
        let w = &self.weights;
        [
            self.intercept,
            w.current_soc,
            w.target_soc,
            w.battery_capacity_kwh,
            w.charger_max_power,
            w.energy_over_power,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl ChargePredictor for LinearChargeModel {
    fn predict(&self, features: &ChargeFeatures) -> Result<f64, PredictError> {
        if features.charger_max_power <= 0.0 {
            return Err(PredictError::Model(format!(
                "charger power must be positive, got {}",
                features.charger_max_power
            )));
        }

        let w = &self.weights;
        let energy_over_power = (features.target_soc - features.current_soc) / 100.0
            * features.battery_capacity_kwh
            / features.charger_max_power;

        let minutes = self.intercept
            + w.current_soc * features.current_soc
            + w.target_soc * features.target_soc
            + w.battery_capacity_kwh * features.battery_capacity_kwh
            + w.charger_max_power * features.charger_max_power
            + w.energy_over_power * energy_over_power;

        if !minutes.is_finite() {
            return Err(PredictError::NonFinite(minutes));
        }
        if minutes < 0.0 {
            return Err(PredictError::Negative(minutes));
        }

        Ok(minutes)
    }
}
