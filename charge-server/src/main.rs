use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charge_server::cache::{CacheConfig, CachedDirectionsClient};
use charge_server::catalog::{CatalogHandle, CatalogSource};
use charge_server::directions::{DirectionsClient, DirectionsConfig};
use charge_server::planner::PlannerConfig;
use charge_server::predictor::{ChargePredictor, LinearChargeModel};
use charge_server::web::{AppState, create_router};

const DEFAULT_STATIONS_PATH: &str = "data/stations.json";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Default catalog refresh interval (1 hour).
const DEFAULT_REFRESH_SECS: u64 = 60 * 60;

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charge_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Planner tuning constants
    let config = match env_opt("PLANNER_CONFIG") {
        Some(path) => PlannerConfig::from_file(&path).expect("Failed to load planner config"),
        None => PlannerConfig::default(),
    };

    // Station catalog (fail fast if unavailable)
    let stations_path =
        env_opt("STATIONS_JSON").unwrap_or_else(|| DEFAULT_STATIONS_PATH.to_string());
    let catalog = CatalogHandle::load(CatalogSource::new(&stations_path))
        .await
        .expect("Failed to load station catalog");

    // Trained charge-time model, optional
    let predictor: Option<Arc<dyn ChargePredictor>> =
        env_opt("CHARGE_MODEL_JSON").and_then(|path| match LinearChargeModel::load(&path) {
            Ok(model) => {
                info!(%path, model = %model.name, "loaded charge-time model");
                Some(Arc::new(model) as Arc<dyn ChargePredictor>)
            }
            Err(e) => {
                warn!(error = %e, "charge-time model unavailable, using physics estimate");
                None
            }
        });

    // Directions client, optional
    let router = match env_opt("GOOGLE_MAPS_API_KEY") {
        Some(key) => match DirectionsClient::new(DirectionsConfig::new(key)) {
            Ok(client) => Some(CachedDirectionsClient::new(client, &CacheConfig::default())),
            Err(e) => {
                warn!(error = %e, "directions client unavailable, routes will be simulated");
                None
            }
        },
        None => {
            warn!("GOOGLE_MAPS_API_KEY not set, routes will be simulated");
            None
        }
    };

    // Spawn background task to reload the catalog
    let refresh_secs = env_opt("CATALOG_REFRESH_SECS")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_REFRESH_SECS);
    if refresh_secs > 0 {
        let catalog_refresh = catalog.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(refresh_secs));
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match catalog_refresh.reload().await {
                    Ok(count) => info!(stations = count, "reloaded station catalog"),
                    Err(e) => error!(error = %e, "failed to reload station catalog"),
                }
            }
        });
    }

    let state = AppState::new(catalog, predictor, router, config);
    let app = create_router(state);

    let addr: SocketAddr = env_opt("BIND_ADDR")
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("Invalid BIND_ADDR");
    info!(%addr, "charge planner listening");
    info!("  GET  /health           - Health check");
    info!("  GET  /api/v1/stations  - Station catalog");
    info!("  POST /api/v1/plan      - Plan a charging stop");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
