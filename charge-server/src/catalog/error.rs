//! Catalog error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when loading the station catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading the catalog file failed
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON for station records
    #[error("failed to parse catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record failed domain validation
    #[error("invalid station {id}: {source}")]
    InvalidStation {
        id: String,
        #[source]
        source: DomainError,
    },

    /// Two records share an identifier
    #[error("duplicate station id: {0}")]
    DuplicateId(String),
}
