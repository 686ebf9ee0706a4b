//! HTTP API module
//!
//! The controller surface of a clock engine, exposed over HTTP so any
//! host (control panel, script, curl) can drive the clock.

pub mod app_state;
pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use app_state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/pause", post(pause_handler))
        .route("/time", post(set_time_handler))
        .route("/time/adjust", post(adjust_time_handler))
        .route("/direction", post(direction_handler))
        .route("/config", post(config_handler))
        .route("/command", post(command_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
