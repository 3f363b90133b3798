//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Service banner
//! - `GET  /health`        - Liveness check
//! - `GET  /movie/search`  - Title and translated plot (rate limited per IP)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, or the configured allow-list
//! - **Rate limiting** - Per-IP token bucket on `/movie/*` (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, root_handler};
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// HTTP-level router options taken from [`crate::config::Config`].
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// When `true`, rate limiting reads client IP from proxy headers instead
    /// of the peer socket address.
    pub behind_proxy: bool,
    pub rate_limit_per_minute: u32,
    /// CORS allow-list; empty allows any origin.
    pub allowed_origins: Vec<String>,
}

impl From<&crate::config::Config> for RouterOptions {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            behind_proxy: config.behind_proxy,
            rate_limit_per_minute: config.rate_limit_per_minute,
            allowed_origins: config.allowed_origins.clone(),
        }
    }
}

/// Constructs the application router with all routes and middleware.
///
/// The rate limiter keys on the client IP, so the returned service must be
/// served with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if the rate limit quota is invalid.
pub fn app_router(state: AppState, options: &RouterOptions) -> Result<NormalizePath<Router>> {
    let movie_router = if options.behind_proxy {
        api::routes::movie_routes().layer(rate_limit::proxy_layer(options.rate_limit_per_minute)?)
    } else {
        api::routes::movie_routes().layer(rate_limit::layer(options.rate_limit_per_minute)?)
    };

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/movie", movie_router)
        .with_state(state)
        .layer(cors::layer(&options.allowed_origins))
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
