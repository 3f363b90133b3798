//! API route configuration.

use crate::api::handlers::search_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Movie routes, nested under `/movie`.
///
/// # Endpoints
///
/// - `GET /search?movie=<name>` - Title and translated plot
pub fn movie_routes() -> Router<AppState> {
    Router::new().route("/search", get(search_handler))
}
