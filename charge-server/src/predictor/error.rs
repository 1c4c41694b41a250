//! Predictor error types.

use std::path::PathBuf;

/// A prediction that could not be used.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    /// No trained model is loaded
    #[error("no trained model available")]
    Unavailable,

    /// The model produced NaN or infinity
    #[error("model produced a non-finite prediction: {0}")]
    NonFinite(f64),

    /// The model produced a negative duration
    #[error("model produced a negative prediction: {0}")]
    Negative(f64),

    /// Any other model failure
    #[error("model error: {0}")]
    Model(String),
}

/// Failure loading a model file.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("failed to read model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed but holds an unusable model
    #[error("invalid model {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}
