//! OMDB movie metadata client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::transport_error;
use crate::config::Config;
use crate::domain::entities::MovieInfo;
use crate::domain::error::{MovieError, Provider};
use crate::domain::providers::MovieLookup;

const DEFAULT_NOT_FOUND: &str = "movie not found";

/// Raw OMDB response, PascalCase as sent by the provider.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbMovieResponse {
    title: Option<String>,
    plot: Option<String>,
    response: String,
    error: Option<String>,
}

impl OmdbMovieResponse {
    /// Converts the provider payload into a [`MovieInfo`].
    ///
    /// Only called for 2xx replies. There, `Response: "False"` is OMDB's own
    /// failure flag and means not found.
    fn into_movie_info(self) -> Result<MovieInfo, MovieError> {
        if self.response.eq_ignore_ascii_case("false") {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NOT_FOUND.to_string());
            return Err(MovieError::NotFound(message));
        }

        match (self.title, self.plot) {
            (Some(title), Some(plot)) => Ok(MovieInfo { title, plot }),
            _ => Err(MovieError::Internal(
                "movie lookup response is missing Title or Plot".to_string(),
            )),
        }
    }
}

/// HTTP client for the OMDB API.
///
/// Issues one `GET <base>?apikey=<key>&t=<name>&plot=full` per lookup, bounded
/// by a deadline. On expiry the in-flight request is dropped.
pub struct OmdbClient {
    http: Client,
    base_url: Url,
    api_key: String,
    timeout: Duration,
}

impl OmdbClient {
    /// Creates a new OMDB client.
    pub fn new(http: Client, base_url: Url, api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http,
            base_url,
            api_key: api_key.into(),
            timeout,
        }
    }

    /// Creates a client from the service configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `omdb_base_url` is not a valid URL.
    pub fn from_config(http: Client, config: &Config) -> Result<Self, url::ParseError> {
        Ok(Self::new(
            http,
            Url::parse(&config.omdb_base_url)?,
            config.omdb_api_key.clone(),
            Duration::from_secs(config.lookup_timeout_secs),
        ))
    }

    /// Builds the request URL. Query values are percent-encoded.
    fn request_url(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("t", name)
            .append_pair("plot", "full");
        url
    }

    async fn fetch(&self, url: Url) -> Result<OmdbMovieResponse, MovieError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(Provider::MovieLookup, &e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "OMDB returned non-success status");
            return Err(MovieError::UpstreamUnavailable {
                provider: Provider::MovieLookup,
                status: Some(status.as_u16()),
            });
        }

        response
            .json::<OmdbMovieResponse>()
            .await
            .map_err(|e| MovieError::Internal(format!("invalid movie lookup response: {}", e)))
    }
}

#[async_trait]
impl MovieLookup for OmdbClient {
    async fn find_by_title(&self, name: &str) -> Result<MovieInfo, MovieError> {
        debug!(movie = %name, "Querying OMDB");

        let body = match tokio::time::timeout(self.timeout, self.fetch(self.request_url(name))).await
        {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    movie = %name,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "OMDB lookup timed out"
                );
                return Err(MovieError::Timeout {
                    provider: Provider::MovieLookup,
                });
            }
        };

        body.into_movie_info()
    }
}
