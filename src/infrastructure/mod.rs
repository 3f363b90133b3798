//! Infrastructure layer for external integrations.
//!
//! This layer implements the provider traits defined by the domain layer with
//! HTTP clients built on `reqwest`.
//!
//! # Modules
//!
//! - [`omdb`] - OMDB movie metadata client
//! - [`translate`] - LibreTranslate-compatible translation client

pub mod omdb;
pub mod translate;

use crate::domain::error::{MovieError, Provider};

/// Maps a `reqwest` transport error to the pipeline taxonomy.
///
/// Timeouts stay distinct from other network failures; everything else is an
/// unavailable upstream, tagged with the HTTP status when one was received.
pub(crate) fn transport_error(provider: Provider, err: &reqwest::Error) -> MovieError {
    if err.is_timeout() {
        MovieError::Timeout { provider }
    } else {
        MovieError::UpstreamUnavailable {
            provider,
            status: err.status().map(|s| s.as_u16()),
        }
    }
}
