//! DTOs for the movie search endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::MoviePlot;

/// Query string of `GET /movie/search`.
///
/// A missing `movie` parameter is treated as an empty name and rejected by
/// validation, so it yields the same 400 as a one-letter name.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub movie: Option<String>,
}

/// Successful search result: the movie title and its translated plot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub title: String,
    pub plot: String,
}

impl From<MoviePlot> for SearchResponse {
    fn from(movie: MoviePlot) -> Self {
        Self {
            title: movie.title,
            plot: movie.plot,
        }
    }
}
