//! Handlers for health check and root endpoints.

use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::{HealthResponse, RootResponse};
use crate::state::AppState;

pub const SERVICE_NAME: &str = "movie-plots-api";

/// Returns service liveness information.
///
/// # Endpoint
///
/// `GET /health`
///
/// Providers are not probed: the check reports that this process is up and
/// serving, for monitoring and deploy checks.
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "service": "movie-plots-api",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T12:00:00.000Z",
///   "uptime_seconds": 42
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("{} {}", SERVICE_NAME, env!("CARGO_PKG_VERSION")),
    })
}
