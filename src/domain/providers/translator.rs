//! Provider trait for text translation.

use crate::domain::entities::Translation;
use crate::domain::error::MovieError;
use async_trait::async_trait;

/// Translates plain text between the languages it was configured with.
///
/// # Implementations
///
/// - [`crate::infrastructure::translate::TranslateClient`] - LibreTranslate-compatible HTTP API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text`, returning the provider's output verbatim.
    ///
    /// # Errors
    ///
    /// - [`MovieError::UpstreamUnavailable`] on a non-success status or transport failure
    /// - [`MovieError::Timeout`] if a deadline is configured and missed
    /// - [`MovieError::Internal`] if the response lacks `translatedText`
    async fn translate(&self, text: &str) -> Result<Translation, MovieError>;
}
