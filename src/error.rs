//! Unified error types.

use thiserror::Error;

/// Top-level error for every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// Coarse failure class, used for log fields.
///
/// Callers of the market-data client never branch on this; every class
/// collapses into the same "fetch failed" outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection, DNS, TLS or timeout.
    Transport,
    /// The server answered with a non-2xx status.
    Status,
    /// The body could not be decoded or validated.
    Decode,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Status => "status",
            FailureKind::Decode => "decode",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HttpError {
    pub fn kind(&self) -> FailureKind {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) if e.is_decode() => FailureKind::Decode,
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) if e.is_status() => FailureKind::Status,
            #[cfg(feature = "http")]
            HttpError::Reqwest(_) => FailureKind::Transport,
            HttpError::Timeout => FailureKind::Transport,
            HttpError::ServerError { .. }
            | HttpError::RateLimited
            | HttpError::NotFound(_)
            | HttpError::BadRequest(_) => FailureKind::Status,
            HttpError::Decode { .. } => FailureKind::Decode,
        }
    }
}

impl SdkError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SdkError::Http(e) => e.kind(),
            SdkError::Validation(_) => FailureKind::Decode,
        }
    }
}
