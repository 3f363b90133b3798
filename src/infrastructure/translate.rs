//! LibreTranslate-compatible translation client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::transport_error;
use crate::config::Config;
use crate::domain::entities::Translation;
use crate::domain::error::{MovieError, Provider};
use crate::domain::providers::Translator;

/// Request body for `POST /translate`.
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

/// HTTP client for a LibreTranslate-compatible `/translate` endpoint.
///
/// Unlike [`crate::infrastructure::omdb::OmdbClient`], no deadline applies
/// unless one is configured.
pub struct TranslateClient {
    http: Client,
    endpoint: String,
    source: String,
    target: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl TranslateClient {
    /// Creates a new translation client for `base_url`.
    ///
    /// Requests go to `<base_url>/translate` and translate from `source` to `target`.
    pub fn new(
        http: Client,
        base_url: &str,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: format!("{}/translate", base_url.trim_end_matches('/')),
            source: source.into(),
            target: target.into(),
            api_key: None,
            timeout: None,
        }
    }

    /// Sends `api_key` with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Bounds every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Creates a client from the service configuration.
    pub fn from_config(http: Client, config: &Config) -> Self {
        let mut client = Self::new(
            http,
            &config.translate_base_url,
            config.translate_source.clone(),
            config.translate_target.clone(),
        );

        if let Some(ref key) = config.translate_api_key {
            client = client.with_api_key(key.clone());
        }

        if let Some(secs) = config.translate_timeout_secs {
            client = client.with_timeout(Duration::from_secs(secs));
        }

        client
    }

    fn request_body<'a>(&'a self, text: &'a str) -> TranslateRequest<'a> {
        TranslateRequest {
            q: text,
            source: &self.source,
            target: &self.target,
            format: "text",
            api_key: self.api_key.as_deref(),
        }
    }
}

#[async_trait]
impl Translator for TranslateClient {
    async fn translate(&self, text: &str) -> Result<Translation, MovieError> {
        debug!(
            source = %self.source,
            target = %self.target,
            chars = text.chars().count(),
            "Requesting translation"
        );

        let mut request = self.http.post(&self.endpoint).json(&self.request_body(text));
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(Provider::Translation, &e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Translation service returned non-success status");
            return Err(MovieError::UpstreamUnavailable {
                provider: Provider::Translation,
                status: Some(status.as_u16()),
            });
        }

        let body = response.json::<TranslateResponse>().await.map_err(|e| {
            if e.is_timeout() {
                MovieError::Timeout {
                    provider: Provider::Translation,
                }
            } else {
                MovieError::Internal(format!("invalid translation response: {}", e))
            }
        })?;

        Ok(Translation {
            translated_text: body.translated_text,
        })
    }
}
