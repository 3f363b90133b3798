//! Handler for the movie search endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::search::{SearchParams, SearchResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Looks a movie up by name and returns its plot translated.
///
/// # Endpoint
///
/// `GET /movie/search?movie=<name>`
///
/// # Response
///
/// ```json
/// {
///   "title": "Inception",
///   "plot": "Um ladrão que rouba segredos corporativos..."
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: name missing, shorter than 2 or longer than 100 characters,
///   or a query string that does not parse (e.g. `movie` given twice)
/// - **404 Not Found**: the movie provider has no match
/// - **500 Internal Server Error**: timeout, provider failure, or unexpected error
///
/// Error bodies are `{ "message": "...", "code": "..." }`.
pub async fn search_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    let name = params.movie.unwrap_or_default();

    let movie = state.movie_service.lookup_and_translate(&name).await?;

    Ok(Json(movie.into()))
}
