//! DTOs for health check and root endpoints.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Current time, RFC 3339.
    pub timestamp: String,
    pub uptime_seconds: u64,
}

/// Response of `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}
