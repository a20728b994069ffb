use thiserror::Error;

use crate::models::ApiError;

/// Error code the controller uses when an id does not resolve.
pub const ENTITY_NOT_FOUND: &str = "ENTITY_NOT_FOUND";

/// Top-level error type for the `shc-api` crate.
///
/// Every gateway call ends in success or exactly one of these variants.
/// [`Error::kind`] folds them into the three failure classes callers
/// usually branch on: transport, API rejection, and contract drift.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, TLS, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request URL could not be built from the configured address.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be configured (CA file, TLS backend).
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Controller ──────────────────────────────────────────────────
    /// The controller answered with an unexpected status and a
    /// well-formed error body.
    #[error("Controller rejected request (HTTP {status}): {}", error.error_code)]
    Api { status: u16, error: ApiError },

    // ── Data ────────────────────────────────────────────────────────
    /// Unexpected status, and the error body did not parse either.
    #[error("Malformed error response (HTTP {status}): {message}")]
    MalformedErrorBody {
        status: u16,
        message: String,
        body: String,
    },

    /// JSON deserialization of a success body failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

/// Coarse failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The exchange never produced a response.
    Transport,
    /// The controller rejected the request.
    Api,
    /// A response arrived but did not match the expected shape.
    Decode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) | Self::InvalidUrl(_) | Self::Tls(_) => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::Api,
            Self::MalformedErrorBody { .. } | Self::Deserialization { .. } => ErrorKind::Decode,
        }
    }

    /// Extract the controller's error code, if available.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Api { error, .. } => Some(error.error_code.as_str()),
            _ => None,
        }
    }

    /// HTTP status of the response that caused this error, if one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::MalformedErrorBody { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.api_error_code() == Some(ENTITY_NOT_FOUND) || self.status() == Some(404)
    }

    /// Returns `true` if the configured request timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
