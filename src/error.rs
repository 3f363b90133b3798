//! HTTP-facing error type.
//!
//! [`AppError`] is what handlers return. Every [`MovieError`] maps to exactly
//! one status and message pair; internal details are logged, never sent.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::error::{MovieError, Provider};

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    NotFound { message: String },
    Timeout { message: String },
    UpstreamUnavailable { message: String },
    RateLimited { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Timeout { .. }
            | AppError::UpstreamUnavailable { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts to the serializable body sent to clients.
    pub fn to_error_body(&self) -> ErrorBody {
        let (code, message) = match self {
            AppError::Validation { message } => ("validation_error", message),
            AppError::NotFound { message } => ("not_found", message),
            AppError::Timeout { message } => ("timeout", message),
            AppError::UpstreamUnavailable { message } => ("upstream_unavailable", message),
            AppError::RateLimited { message } => ("rate_limited", message),
            AppError::Internal { message } => ("internal_error", message),
        };

        ErrorBody {
            message: message.clone(),
            code: code.to_string(),
        }
    }
}

impl From<MovieError> for AppError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::Validation(message) => AppError::Validation { message },
            MovieError::NotFound(message) => AppError::NotFound { message },
            MovieError::Timeout { provider } => AppError::Timeout {
                message: match provider {
                    Provider::MovieLookup => {
                        "Timed out while looking up the movie. Please try again.".to_string()
                    }
                    Provider::Translation => {
                        "Timed out while translating the plot. Please try again.".to_string()
                    }
                },
            },
            MovieError::UpstreamUnavailable { provider, status } => {
                let subject = match provider {
                    Provider::MovieLookup => "Movie lookup",
                    Provider::Translation => "Translation",
                };
                let message = match status {
                    Some(code) => format!("{} failed: {}", subject, code),
                    None => format!("{} service is unreachable", subject),
                };
                AppError::UpstreamUnavailable { message }
            }
            MovieError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                AppError::internal("Internal Server Error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_error_body())).into_response()
    }
}
