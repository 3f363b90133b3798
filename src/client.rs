//! HTTP client for the movie plots API.
//!
//! Used by the `movie-search` binary; mirrors what a browser frontend does:
//! call `GET /movie/search?movie=<name>` and surface the error `message`
//! on failure.

use reqwest::{Client, StatusCode};
use url::Url;

use crate::api::dto::search::SearchResponse;
use crate::error::ErrorBody;

/// Errors returned by [`ApiClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an error status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Client for a running movie plots server.
pub struct ApiClient {
    http: Client,
    search_url: Url,
}

impl ApiClient {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:3000`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let search_url = Url::parse(&format!(
            "{}/movie/search",
            base_url.trim_end_matches('/')
        ))?;

        Ok(Self {
            http: Client::new(),
            search_url,
        })
    }

    /// Searches a movie and returns its title with the translated plot.
    ///
    /// The name is sent as typed; the server trims, validates, and sanitizes it.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Api`] with the server's message on a non-success status
    /// - [`ClientError::Transport`] if the server cannot be reached or the body is invalid
    pub async fn search(&self, name: &str) -> Result<SearchResponse, ClientError> {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair("movie", name);

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("request failed: {}", status.as_u16()));
            return Err(ClientError::Api { status, message });
        }

        Ok(response.json::<SearchResponse>().await?)
    }
}
