//! Error types for the console shell.
//!
//! The shell itself never propagates a panic: navigation to unknown paths
//! resolves to a not-found view, theme probing falls back to a default, and
//! API failures surface to the requesting view as an [`ApiError`] the view
//! can match on to render a distinct failure state.

use thiserror::Error;

/// Failures of the API access layer, distinguishable by the caller.
///
/// Views render different states for each variant: a transport failure is
/// usually a stopped daemon, a non-2xx status is commonly missing basic-auth
/// credentials, and a decode failure points at a version mismatch between
/// console and daemon.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect, DNS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response arrived but its body could not be decoded.
    #[error("malformed payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a reqwest error into the console's taxonomy.
    ///
    /// Status errors are handled before this point (the gateway inspects the
    /// status code itself), so everything arriving here is transport-level.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Transport(format!("timed out: {err}"))
        } else if err.is_connect() {
            ApiError::Transport(format!("connection failed: {err}"))
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }

    /// Whether retrying the same request later can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => (500..=599).contains(status),
            ApiError::Decode(_) => false,
        }
    }

    /// Short label for log lines and status chrome.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode(_) => "decode",
        }
    }
}

/// Failures during route table construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    /// Route tables must declare at least one route.
    #[error("route table has no routes")]
    Empty,

    /// Paths are unique within one application instance.
    #[error("duplicate route path: {path}")]
    DuplicatePath { path: String },
}

/// Failures during the one-time bootstrap sequence.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A console shell is already mounted in this process.
    #[error("console already mounted in this process")]
    AlreadyMounted,

    /// Terminal setup or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failures while parsing command-line flags.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("flag {flag} requires a value")]
    MissingValue { flag: String },

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown flag: {flag}")]
    UnknownFlag { flag: String },
}
