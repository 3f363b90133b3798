//! Error taxonomy for the movie pipeline.

use std::fmt;

/// External dependency an upstream failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    MovieLookup,
    Translation,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MovieLookup => write!(f, "movie lookup"),
            Self::Translation => write!(f, "translation"),
        }
    }
}

/// Failures produced by the lookup-and-translate pipeline.
///
/// Every variant aborts the pipeline immediately; none is retried.
/// [`crate::error::AppError`] maps each variant to exactly one HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MovieError {
    /// Caller input violates the name constraints. The message is user-facing.
    #[error("{0}")]
    Validation(String),

    /// The metadata provider reported no match.
    #[error("{0}")]
    NotFound(String),

    /// A provider did not answer before its deadline.
    #[error("{provider} timed out")]
    Timeout { provider: Provider },

    /// A provider answered with a non-success status or could not be reached.
    #[error("{provider} unavailable ({})", describe_status(.status))]
    UpstreamUnavailable {
        provider: Provider,
        status: Option<u16>,
    },

    /// Anything else, e.g. an undecodable provider response.
    #[error("internal error: {0}")]
    Internal(String),
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "unreachable".to_string(),
    }
}
