//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::DomainError;
use crate::planner::{RouteProvider, TripPlanner};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<R: RouteProvider + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/stations", get(list_stations::<R>))
        .route("/api/v1/plan", post(plan_trip::<R>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the current catalog snapshot.
async fn list_stations<R: RouteProvider + 'static>(
    State(state): State<AppState<R>>,
) -> Json<StationsResponse> {
    let catalog = state.catalog.snapshot().await;
    Json(StationsResponse::from_catalog(&catalog))
}

/// Plan a charging stop for a trip.
async fn plan_trip<R: RouteProvider + 'static>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<Json<PlanTripResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanTripRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&body), "rejected plan request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let request = req.into_trip_request()?;
    let catalog = state.catalog.snapshot().await;

    let planner = TripPlanner::new(&catalog, &state.config)
        .with_predictor(state.predictor.as_deref());
    let plan = match state.router.as_deref() {
        Some(router) => planner.with_router(router).plan_trip(&request).await,
        None => planner.plan_trip(&request).await,
    };

    Ok(Json(PlanTripResponse::from_plan(&plan)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
