//! HTTP server initialization and runtime setup.
//!
//! Builds the provider clients, wires the pipeline, and runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::MovieService;
use crate::config::Config;
use crate::infrastructure::omdb::OmdbClient;
use crate::infrastructure::translate::TranslateClient;
use crate::routes::{RouterOptions, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared state from configuration.
///
/// One `reqwest::Client` (and its connection pool) is shared by both
/// provider clients.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or a provider URL is invalid.
pub fn build_state(config: &Config) -> Result<AppState> {
    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let lookup = OmdbClient::from_config(http.clone(), config).context("Invalid OMDB_BASE_URL")?;
    let translator = TranslateClient::from_config(http, config);

    let movie_service = MovieService::new(Arc::new(lookup), Arc::new(translator));

    Ok(AppState::new(Arc::new(movie_service)))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Provider HTTP clients
/// - Movie pipeline service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state, &RouterOptions::from(&config))?;

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
