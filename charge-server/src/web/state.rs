//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedDirectionsClient;
use crate::catalog::CatalogHandle;
use crate::planner::{PlannerConfig, RouteProvider};
use crate::predictor::ChargePredictor;

/// Shared application state.
///
/// Contains all the services needed to handle requests. `R` is the
/// directions provider, the cached live client outside of tests.
pub struct AppState<R = CachedDirectionsClient> {
    /// Current station catalog
    pub catalog: CatalogHandle,

    /// Trained charge-time model, if one was loaded
    pub predictor: Option<Arc<dyn ChargePredictor>>,

    /// Directions provider; `None` means routes are always simulated
    pub router: Option<Arc<R>>,

    /// Planner tuning constants
    pub config: Arc<PlannerConfig>,
}

// Manual impl so `R` itself need not be `Clone`.
impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            predictor: self.predictor.clone(),
            router: self.router.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R: RouteProvider> AppState<R> {
    /// Create a new app state.
    pub fn new(
        catalog: CatalogHandle,
        predictor: Option<Arc<dyn ChargePredictor>>,
        router: Option<R>,
        config: PlannerConfig,
    ) -> Self {
        Self {
            catalog,
            predictor,
            router: router.map(Arc::new),
            config: Arc::new(config),
        }
    }
}
