//! Movie lookup and plot translation service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{MoviePlot, MovieQuery};
use crate::domain::error::MovieError;
use crate::domain::providers::{MovieLookup, Translator};

/// Orchestrates the lookup-and-translate pipeline.
///
/// The pipeline is strictly linear: validate, look up, translate, shape. The
/// first failure aborts it, so callers either get a complete [`MoviePlot`] or
/// an error, never a partial result.
pub struct MovieService {
    lookup: Arc<dyn MovieLookup>,
    translator: Arc<dyn Translator>,
}

impl MovieService {
    /// Creates a new movie service.
    pub fn new(lookup: Arc<dyn MovieLookup>, translator: Arc<dyn Translator>) -> Self {
        Self { lookup, translator }
    }

    /// Finds a movie by name and returns its title with the translated plot.
    ///
    /// # Flow
    ///
    /// 1. Trim, validate, and sanitize `raw_name` (no network call on failure)
    /// 2. Look the movie up with the metadata provider
    /// 3. Translate the plot with the translation provider
    /// 4. Return `{ title, plot }` where `plot` is the translated text
    ///
    /// # Errors
    ///
    /// Returns [`MovieError::Validation`] for bad input. Provider errors
    /// ([`MovieError::NotFound`], [`MovieError::Timeout`],
    /// [`MovieError::UpstreamUnavailable`], [`MovieError::Internal`]) are
    /// propagated unchanged.
    pub async fn lookup_and_translate(&self, raw_name: &str) -> Result<MoviePlot, MovieError> {
        let query = MovieQuery::parse(raw_name)?;
        info!(movie = %query.name(), "Searching movie");

        let movie = self
            .lookup
            .find_by_title(query.name())
            .await
            .inspect_err(|e| warn!(movie = %query.name(), error = %e, "Movie lookup failed"))?;
        info!(title = %movie.title, "Movie found");

        let translation = self
            .translator
            .translate(&movie.plot)
            .await
            .inspect_err(|e| warn!(title = %movie.title, error = %e, "Plot translation failed"))?;

        Ok(MoviePlot {
            title: movie.title,
            plot: translation.translated_text,
        })
    }
}
