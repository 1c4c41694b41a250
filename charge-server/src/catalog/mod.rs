//! Station catalog.
//!
//! The catalog is a read-only snapshot of station records, loaded once at
//! startup from a JSON file and optionally reloaded in the background.
//! Requests always plan against a single consistent snapshot.

mod error;
mod handle;
mod source;

pub use error::CatalogError;
pub use handle::CatalogHandle;
pub use source::{CatalogSource, StationRecord, parse_catalog};

use chrono::{DateTime, Utc};

use crate::domain::{Station, StationId};

/// An immutable snapshot of the station catalog.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    stations: Vec<Station>,
    loaded_at: DateTime<Utc>,
}

impl StationCatalog {
    /// Create a catalog snapshot from stations, stamped with the current time.
    pub fn new(stations: Vec<Station>) -> Self {
        Self {
            stations,
            loaded_at: Utc::now(),
        }
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn get(&self, id: &StationId) -> Option<&Station> {
        self.stations.iter().find(|s| &s.id == id)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// When this snapshot was built.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChargerType, Coordinate, StationStatus};

    fn station(id: &str) -> Station {
        Station::new(
            StationId::parse(id).unwrap(),
            format!("Station {id}"),
            Coordinate::new(3.0, 101.0).unwrap(),
            ChargerType::DcFast,
            50.0,
            StationStatus::Available,
        )
    }

    #[test]
    fn lookup_by_id() {
        let catalog = StationCatalog::new(vec![station("a"), station("b")]);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());

        let b = catalog.get(&StationId::parse("b").unwrap()).unwrap();
        assert_eq!(b.name, "Station b");
        assert!(catalog.get(&StationId::parse("z").unwrap()).is_none());
    }

    #[test]
    fn empty_catalog() {
        let catalog = StationCatalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.stations().len(), 0);
    }
}
