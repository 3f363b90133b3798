//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use axum::response::{IntoResponse, Response};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Interval after which one request of the quota is replenished.
fn replenish_period(per_minute: u32) -> Duration {
    Duration::from_millis(60_000 / u64::from(per_minute.max(1)))
}

use crate::error::AppError;

/// Renders limiter rejections with the same JSON body as every other error.
///
/// Rate limit headers (`retry-after`, `x-ratelimit-*`) are kept.
fn governor_error(err: GovernorError) -> Response {
    match err {
        GovernorError::TooManyRequests { wait_time, headers } => {
            let mut response = AppError::RateLimited {
                message: format!("Too many requests, retry in {}s", wait_time),
            }
            .into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        GovernorError::UnableToExtractKey => {
            AppError::internal("Unable to determine client address").into_response()
        }
        GovernorError::Other { code, msg, headers } => {
            let mut response =
                AppError::internal(msg.unwrap_or_else(|| "Rate limiter error".to_string()))
                    .into_response();
            *response.status_mut() = code;
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
    }
}

/// Creates a per-IP rate limiter for the movie search routes.
///
/// # Limits
///
/// - **Rate**: `per_minute` requests per minute, replenished evenly
/// - **Burst**: `per_minute` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests` with a
/// `{ "message", "code": "rate_limited" }` body.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address. Requires the router to be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if `per_minute` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/search", get(search_handler))
///     .layer(rate_limit::layer(10)?);
/// ```
pub fn layer(
    per_minute: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .period(replenish_period(per_minute))
        .burst_size(per_minute)
        .finish()
        .context("rate limit quota must be greater than zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)).error_handler(governor_error))
}

/// Same limits as [`layer`], keyed on the client IP reported by a reverse proxy.
///
/// Reads `X-Forwarded-For`, `X-Real-IP`, and `Forwarded`, falling back to
/// the peer address. Use only behind a trusted proxy, since clients can set
/// these headers themselves.
///
/// # Errors
///
/// Returns an error if `per_minute` is zero.
pub fn proxy_layer(
    per_minute: u32,
) -> Result<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .period(replenish_period(per_minute))
        .burst_size(per_minute)
        .finish()
        .context("rate limit quota must be greater than zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)).error_handler(governor_error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replenish_period() {
        assert_eq!(replenish_period(10), Duration::from_secs(6));
        assert_eq!(replenish_period(60), Duration::from_secs(1));
        assert_eq!(replenish_period(0), Duration::from_secs(60));
    }

    #[test]
    fn test_too_many_requests_body_and_headers() {
        let mut headers = axum::http::HeaderMap::new();
        headers.insert("retry-after", "6".parse().unwrap());

        let response = governor_error(GovernorError::TooManyRequests {
            wait_time: 6,
            headers: Some(headers),
        });

        assert_eq!(response.status(), axum::http::StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()["retry-after"], "6");
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }

    #[test]
    fn test_unextractable_key_is_internal() {
        let response = governor_error(GovernorError::UnableToExtractKey);
        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_layer_rejects_zero_quota() {
        assert!(layer(0).is_err());
        assert!(proxy_layer(0).is_err());
        assert!(layer(10).is_ok());
    }
}
