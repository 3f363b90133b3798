//! # Movie Plots
//!
//! A small web service that looks a movie up on OMDB and returns its plot
//! translated by a LibreTranslate-compatible service.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, error taxonomy, and provider traits
//! - **Application Layer** ([`application`]) - The lookup-and-translate pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - OMDB and translation HTTP clients
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//! - **Client** ([`client`]) - HTTP client for this service, used by the `movie-search` CLI
//!
//! ## Request Flow
//!
//! ```text
//! GET /movie/search?movie=Inception
//!   -> validate + sanitize name
//!   -> OMDB lookup (5s deadline)
//!   -> translate plot
//!   -> { "title": "Inception", "plot": "Um ladrão que rouba..." }
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export OMDB_API_KEY="your-key"
//! export TRANSLATE_URL="http://localhost:5000"   # optional
//!
//! cargo run
//! cargo run --bin movie-search -- Inception
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::MovieService;
    pub use crate::domain::entities::{MovieInfo, MoviePlot, MovieQuery, Translation};
    pub use crate::domain::error::{MovieError, Provider};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
