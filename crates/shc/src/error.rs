//! CLI error types with miette diagnostics.
//!
//! Maps `shc_api::Error` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use shc_api::ErrorKind;
use shc_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const REJECTED: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const CONTRACT: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the controller")]
    #[diagnostic(
        code(shc::connection_failed),
        help(
            "Check that the controller is powered on and reachable.\n\
             Self-signed certificates are accepted unless --validate-cert is set."
        )
    )]
    ConnectionFailed {
        #[source]
        source: shc_api::Error,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(shc::timeout),
        help("The controller did not answer within 60s. Check its load and network path.")
    )]
    Timeout {
        #[source]
        source: shc_api::Error,
    },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(shc::not_found),
        help("Run: shc {resource_type}s list to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Controller rejected the request (HTTP {status}): {code}")]
    #[diagnostic(code(shc::api_error))]
    ApiError { status: u16, code: String },

    #[error("Unexpected response from the controller")]
    #[diagnostic(
        code(shc::contract),
        help("The response did not match the expected schema. Try --api-version or -vv for details.")
    )]
    Contract {
        #[source]
        source: shc_api::Error,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(shc::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No controller address configured")]
    #[diagnostic(
        code(shc::no_config),
        help(
            "Pass --address (or set SHC_ADDRESS), or add a profile to\n\
             {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(shc::config))]
    Config(#[from] ConfigError),

    // ── Output ───────────────────────────────────────────────────────
    #[error("Failed to render output: {0}")]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::ApiError { .. } => exit_code::REJECTED,
            Self::Contract { .. } => exit_code::CONTRACT,
            Self::Validation { .. } | Self::NoConfig { .. } | Self::Config(_) => exit_code::USAGE,
            Self::Render(_) => exit_code::GENERAL,
        }
    }

    /// Convert an API error, naming the resource when the controller
    /// reports it missing.
    pub fn from_api(err: shc_api::Error, resource_type: &str, identifier: Option<&str>) -> Self {
        if let Some(identifier) = identifier.filter(|_| err.is_not_found()) {
            return Self::NotFound {
                resource_type: resource_type.into(),
                identifier: identifier.into(),
            };
        }
        Self::from(err)
    }
}

// ── shc_api::Error → CliError mapping ────────────────────────────────

impl From<shc_api::Error> for CliError {
    fn from(err: shc_api::Error) -> Self {
        if let shc_api::Error::InvalidUrl(ref e) = err {
            return Self::Validation {
                field: "address".into(),
                reason: e.to_string(),
            };
        }
        match err.kind() {
            ErrorKind::Transport if err.is_timeout() => Self::Timeout { source: err },
            ErrorKind::Transport => Self::ConnectionFailed { source: err },
            ErrorKind::Api => Self::ApiError {
                status: err.status().unwrap_or_default(),
                code: err.api_error_code().unwrap_or_default().to_owned(),
            },
            ErrorKind::Decode => Self::Contract { source: err },
        }
    }
}
