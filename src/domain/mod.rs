//! Domain layer containing the pipeline's entities, errors, and provider contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Request-scoped data structures
//! - [`error`] - Error taxonomy shared by every stage
//! - [`providers`] - Traits for the external movie and translation APIs
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on HTTP frameworks or clients
//! - Provider traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in [`crate::application::services::MovieService`]

pub mod entities;
pub mod error;
pub mod providers;
