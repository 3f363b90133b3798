//! Application layer services implementing business logic.
//!
//! Services consume the provider traits from [`crate::domain::providers`] and
//! expose a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::movie_service::MovieService`] - Movie lookup and plot translation

pub mod services;
