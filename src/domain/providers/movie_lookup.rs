//! Provider trait for movie metadata lookups.

use crate::domain::entities::MovieInfo;
use crate::domain::error::MovieError;
use async_trait::async_trait;

/// Looks up a single movie by title.
///
/// # Implementations
///
/// - [`crate::infrastructure::omdb::OmdbClient`] - OMDB HTTP API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieLookup: Send + Sync {
    /// Finds the movie whose title best matches `name`.
    ///
    /// `name` must already be validated and sanitized (see
    /// [`crate::domain::entities::MovieQuery`]). Issues exactly one outbound
    /// request and never retries.
    ///
    /// # Errors
    ///
    /// - [`MovieError::NotFound`] if the provider reports no match
    /// - [`MovieError::Timeout`] if the provider misses its deadline
    /// - [`MovieError::UpstreamUnavailable`] on a non-success status or transport failure
    /// - [`MovieError::Internal`] if the response cannot be decoded
    async fn find_by_title(&self, name: &str) -> Result<MovieInfo, MovieError>;
}
