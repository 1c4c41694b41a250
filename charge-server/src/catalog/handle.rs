//! Hot-swappable pointer to the current catalog snapshot.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use super::StationCatalog;
use super::error::CatalogError;
use super::source::CatalogSource;

/// Thread-safe handle to the current station catalog.
///
/// Readers take a cheap `Arc` clone of the snapshot and plan against it;
/// a reload swaps the pointer without disturbing requests in flight.
#[derive(Clone)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<StationCatalog>>>,
    source: Option<CatalogSource>,
}

impl CatalogHandle {
    /// Create a handle by loading the catalog from a file.
    ///
    /// This will fail if the file is missing or invalid.
    pub async fn load(source: CatalogSource) -> Result<Self, CatalogError> {
        let catalog = source.load().await?;
        info!(
            stations = catalog.len(),
            path = %source.path().display(),
            "loaded station catalog"
        );

        Ok(Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
            source: Some(source),
        })
    }

    /// Create a handle around a fixed catalog with no backing file.
    pub fn fixed(catalog: StationCatalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
            source: None,
        }
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<StationCatalog> {
        let guard = self.current.read().await;
        Arc::clone(&guard)
    }

    /// Replace the current snapshot.
    pub async fn replace(&self, catalog: StationCatalog) {
        let mut guard = self.current.write().await;
        *guard = Arc::new(catalog);
    }

    /// Reload the catalog from its file.
    ///
    /// On success, swaps in the new snapshot and returns its size. On
    /// failure, the existing snapshot is preserved and the error is returned.
    /// A handle with no backing file keeps its snapshot and reports its size.
    pub async fn reload(&self) -> Result<usize, CatalogError> {
        let Some(source) = &self.source else {
            return Ok(self.snapshot().await.len());
        };

        let catalog = source.load().await?;
        let count = catalog.len();
        self.replace(catalog).await;

        Ok(count)
    }
}
