//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::{
    engine::Command,
    render::ClockStyle,
    state::{ClockSnapshot, Direction},
};
use super::app_state::AppState;
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Request body for POST /time
#[derive(Debug, Deserialize)]
pub struct SetTimeRequest {
    pub seconds: i64,
}

/// Request body for POST /time/adjust
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustTimeRequest {
    pub delta_seconds: i64,
}

/// Request body for POST /direction
#[derive(Debug, Deserialize)]
pub struct DirectionRequest {
    pub direction: Direction,
}

/// Read the engine snapshot after the command queue has drained.
async fn current_snapshot(state: &AppState) -> Result<ClockSnapshot, StatusCode> {
    match state.controller.snapshot().await {
        Ok(clock) => Ok(clock),
        Err(e) => {
            error!("Failed to read clock snapshot: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Handle POST /start - Begin counting
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    state.controller.start();
    state.record_command("START");
    let clock = current_snapshot(&state).await?;
    info!("Start endpoint called - clock at {}", clock.display);
    Ok(Json(ApiResponse::new("Clock started".to_string(), clock)))
}

/// Handle POST /pause - Freeze the current value
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, StatusCode> {
    state.controller.pause();
    state.record_command("PAUSE");
    let clock = current_snapshot(&state).await?;
    info!("Pause endpoint called - clock at {}", clock.display);
    Ok(Json(ApiResponse::new("Clock paused".to_string(), clock)))
}

/// Handle POST /time - Jump to an absolute second count
pub async fn set_time_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SetTimeRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    state.controller.set_time(request.seconds);
    state.record_command("SET_TIME");
    let clock = current_snapshot(&state).await?;
    info!("Set-time endpoint called - clock at {}", clock.display);
    Ok(Json(ApiResponse::new(
        format!("Clock set to {} seconds", request.seconds),
        clock,
    )))
}

/// Handle POST /time/adjust - Shift the current value
pub async fn adjust_time_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AdjustTimeRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    state.controller.adjust_time(request.delta_seconds);
    state.record_command("ADJUST_TIME");
    let clock = current_snapshot(&state).await?;
    info!("Adjust-time endpoint called - clock at {}", clock.display);
    Ok(Json(ApiResponse::new(
        format!("Clock adjusted by {} seconds", request.delta_seconds),
        clock,
    )))
}

/// Handle POST /direction - Switch the counting direction
pub async fn direction_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DirectionRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    state.controller.set_direction(request.direction);
    state.record_command("SET_DIRECTION");
    let clock = current_snapshot(&state).await?;
    info!("Direction endpoint called: {:?}", request.direction);
    Ok(Json(ApiResponse::new(
        format!("Counting direction set to {:?}", request.direction),
        clock,
    )))
}

/// Handle POST /config - Replace the visual configuration
pub async fn config_handler(
    State(state): State<Arc<AppState>>,
    Json(style): Json<ClockStyle>,
) -> Result<Json<ApiResponse>, StatusCode> {
    state.controller.update_config(style);
    state.record_command("UPDATE_CONFIG");
    let clock = current_snapshot(&state).await?;
    info!("Config endpoint called");
    Ok(Json(ApiResponse::new(
        "Visual configuration updated".to_string(),
        clock,
    )))
}

/// Handle POST /command - Forward a raw protocol message
pub async fn command_handler(
    State(state): State<Arc<AppState>>,
    Json(command): Json<Command>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let label = command.label();
    state.controller.dispatch(command);
    state.record_command(label);
    let clock = current_snapshot(&state).await?;
    info!("Command endpoint called: {}", label);
    Ok(Json(ApiResponse::new(format!("Applied {}", label), clock)))
}

/// Handle GET /status - Return current clock and server status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let clock = current_snapshot(&state).await?;
    let (last_command, last_command_time) = state.last_command();

    Ok(Json(StatusResponse {
        clock,
        uptime: state.uptime(),
        host: state.host.clone(),
        port: state.port,
        last_command,
        last_command_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
