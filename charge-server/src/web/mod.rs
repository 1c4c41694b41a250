//! Web layer for the charging-stop planner.
//!
//! Provides HTTP endpoints for listing stations and planning trips.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
