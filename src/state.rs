//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::application::services::MovieService;

/// State cloned into every request handler.
///
/// Holds no mutable data: requests share only the read-only service and
/// its provider clients.
#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
    /// Process start, reported as uptime by the health check.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(movie_service: Arc<MovieService>) -> Self {
        Self {
            movie_service,
            started_at: Instant::now(),
        }
    }
}
