//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed explicitly
//! to the components that need it.
//!
//! ## Required Variables
//!
//! - `OMDB_API_KEY` (or `API_KEY`) - OMDB credential
//!
//! ## Optional Variables
//!
//! - `OMDB_BASE_URL` (or `BASE_URL`) - OMDB endpoint (default: `http://www.omdbapi.com/`)
//! - `TRANSLATE_URL` - Translation service base URL (default: `http://localhost:5000`)
//! - `TRANSLATE_API_KEY` - Key sent to the translation service, if it requires one
//! - `TRANSLATE_SOURCE` / `TRANSLATE_TARGET` - Languages (default: `en` / `pt`)
//! - `LOOKUP_TIMEOUT_SECS` - Deadline for the OMDB call (default: 5)
//! - `TRANSLATE_TIMEOUT_SECS` - Deadline for the translation call (default: none)
//! - `LISTEN` - Bind address; falls back to `0.0.0.0:$PORT` (`PORT` default: 3000)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IP from proxy headers for rate limiting (default: `false`)
//! - `ALLOWED_ORIGINS` - Comma-separated CORS allow-list (default: any origin)
//! - `RATE_LIMIT_PER_MINUTE` - Search requests per client IP per minute (default: 10)

use anyhow::{Context, Result};
use std::env;
use url::Url;

pub const DEFAULT_OMDB_BASE_URL: &str = "http://www.omdbapi.com/";
pub const DEFAULT_TRANSLATE_URL: &str = "http://localhost:5000";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub omdb_api_key: String,
    pub omdb_base_url: String,
    pub translate_base_url: String,
    pub translate_api_key: Option<String>,
    pub translate_source: String,
    pub translate_target: String,
    /// Deadline for one OMDB lookup in seconds.
    pub lookup_timeout_secs: u64,
    /// Deadline for one translation call in seconds. `None` waits indefinitely.
    pub translate_timeout_secs: Option<u64>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit_per_minute: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the OMDB API key is missing or a numeric variable
    /// cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let omdb_api_key = env::var("OMDB_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .context("OMDB_API_KEY (or API_KEY) must be set")?;

        let omdb_base_url = env::var("OMDB_BASE_URL")
            .or_else(|_| env::var("BASE_URL"))
            .unwrap_or_else(|_| DEFAULT_OMDB_BASE_URL.to_string());

        let translate_base_url =
            env::var("TRANSLATE_URL").unwrap_or_else(|_| DEFAULT_TRANSLATE_URL.to_string());
        let translate_api_key = env::var("TRANSLATE_API_KEY").ok().filter(|k| !k.is_empty());
        let translate_source = env::var("TRANSLATE_SOURCE").unwrap_or_else(|_| "en".to_string());
        let translate_target = env::var("TRANSLATE_TARGET").unwrap_or_else(|_| "pt".to_string());

        let lookup_timeout_secs = parse_var("LOOKUP_TIMEOUT_SECS")?.unwrap_or(5);
        let translate_timeout_secs = parse_var("TRANSLATE_TIMEOUT_SECS")?;

        let listen_addr = Self::load_listen_addr()?;
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_default();

        let rate_limit_per_minute = parse_var("RATE_LIMIT_PER_MINUTE")?.unwrap_or(10);

        Ok(Self {
            omdb_api_key,
            omdb_base_url,
            translate_base_url,
            translate_api_key,
            translate_source,
            translate_target,
            lookup_timeout_secs,
            translate_timeout_secs,
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            allowed_origins,
            rate_limit_per_minute,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT`, with `PORT` defaulting to 3000
    fn load_listen_addr() -> Result<String> {
        if let Ok(listen) = env::var("LISTEN") {
            return Ok(listen);
        }

        let port: u16 = parse_var("PORT")?.unwrap_or(3000);
        Ok(format!("0.0.0.0:{}", port))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the OMDB API key is empty
    /// - a provider URL is not an absolute `http`/`https` URL
    /// - a language code is empty
    /// - a timeout is zero
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `rate_limit_per_minute` is outside 1..=10000
    pub fn validate(&self) -> Result<()> {
        if self.omdb_api_key.trim().is_empty() {
            anyhow::bail!("OMDB_API_KEY must not be empty");
        }

        validate_http_url("OMDB_BASE_URL", &self.omdb_base_url)?;
        validate_http_url("TRANSLATE_URL", &self.translate_base_url)?;

        if self.translate_source.trim().is_empty() || self.translate_target.trim().is_empty() {
            anyhow::bail!("TRANSLATE_SOURCE and TRANSLATE_TARGET must not be empty");
        }

        if self.lookup_timeout_secs == 0 {
            anyhow::bail!("LOOKUP_TIMEOUT_SECS must be greater than 0");
        }

        if self.translate_timeout_secs == Some(0) {
            anyhow::bail!("TRANSLATE_TIMEOUT_SECS must be greater than 0 when set");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(1..=10_000).contains(&self.rate_limit_per_minute) {
            anyhow::bail!(
                "RATE_LIMIT_PER_MINUTE must be between 1 and 10000, got {}",
                self.rate_limit_per_minute
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  OMDB: {}", self.omdb_base_url);
        tracing::info!("  OMDB API key: {}", mask_secret(&self.omdb_api_key));
        tracing::info!(
            "  Translation: {} ({} -> {})",
            self.translate_base_url,
            self.translate_source,
            self.translate_target
        );
        tracing::info!("  Lookup timeout: {}s", self.lookup_timeout_secs);

        match self.translate_timeout_secs {
            Some(secs) => tracing::info!("  Translation timeout: {}s", secs),
            None => tracing::info!("  Translation timeout: none"),
        }

        if self.allowed_origins.is_empty() {
            tracing::info!("  CORS: any origin");
        } else {
            tracing::info!("  CORS: {}", self.allowed_origins.join(", "));
        }

        tracing::info!("  Rate limit: {}/min per IP", self.rate_limit_per_minute);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional numeric environment variable.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be a number, got '{}'", name, value)),
        Err(_) => Ok(None),
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect()
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL: '{}'", name, value))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{} must start with 'http://' or 'https://', got '{}'", name, value);
    }

    Ok(())
}

/// Masks a secret for logging, keeping only its last 4 characters.
///
/// - `abcd1234` → `****1234`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
