//! Loading station records from JSON.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{ChargerType, Coordinate, Station, StationId, StationStatus};

use super::StationCatalog;
use super::error::CatalogError;

/// Power assumed when a record omits it.
const DEFAULT_POWER_KW: f64 = 50.0;

/// Raw station record as stored in the catalog file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub charger_type: Option<String>,
    pub max_power_kw: Option<f64>,
    pub status: Option<String>,
}

impl StationRecord {
    /// Validate the record into a domain station.
    ///
    /// Missing power defaults to 50 kW, missing type to DC Fast and
    /// missing status to Unknown.
    pub fn into_station(self) -> Result<Station, CatalogError> {
        let invalid = |source| CatalogError::InvalidStation {
            id: self.id.clone(),
            source,
        };

        let id = StationId::parse(&self.id).map_err(invalid)?;
        let location = Coordinate::new(self.latitude, self.longitude).map_err(invalid)?;
        let charger_type = match &self.charger_type {
            Some(t) => t.parse::<ChargerType>().map_err(invalid)?,
            None => ChargerType::DcFast,
        };
        let status = match &self.status {
            Some(s) => s.parse::<StationStatus>().map_err(invalid)?,
            None => StationStatus::Unknown,
        };
        let max_power_kw = self.max_power_kw.unwrap_or(DEFAULT_POWER_KW);

        Ok(Station::new(
            id,
            self.name,
            location,
            charger_type,
            max_power_kw,
            status,
        ))
    }
}

/// Parse a catalog from a JSON array of station records.
pub fn parse_catalog(json: &str, path: &Path) -> Result<StationCatalog, CatalogError> {
    let records: Vec<StationRecord> =
        serde_json::from_str(json).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut stations = Vec::with_capacity(records.len());

    for record in records {
        let station = record.into_station()?;
        if !seen.insert(station.id.clone()) {
            return Err(CatalogError::DuplicateId(station.id.to_string()));
        }
        stations.push(station);
    }

    Ok(StationCatalog::new(stations))
}

/// A catalog file on disk.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    path: PathBuf,
}

impl CatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the whole catalog.
    ///
    /// Any invalid record fails the whole load, so a reload never
    /// produces a partial snapshot.
    pub async fn load(&self) -> Result<StationCatalog, CatalogError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        parse_catalog(&json, &self.path)
    }
}
