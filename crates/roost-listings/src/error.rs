use std::fmt;

use thiserror::Error;

/// Why an upstream read did not produce a usable answer.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, TLS or timeout failure.
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The upstream answered 200 but with nothing usable in it.
    #[error("empty response for {context}")]
    Empty { context: String },
}

impl UpstreamError {
    #[must_use]
    pub fn cause(&self) -> FallbackCause {
        match self {
            Self::Network(_) => FallbackCause::Network,
            Self::Status { status, .. } => FallbackCause::Status(*status),
            Self::Decode { .. } => FallbackCause::Decode,
            Self::Empty { .. } => FallbackCause::Empty,
        }
    }
}

/// Closed set of reasons a read is answered from the mock catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCause {
    Network,
    Status(u16),
    Decode,
    Empty,
}

impl fmt::Display for FallbackCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network"),
            Self::Status(code) => write!(f, "status {code}"),
            Self::Decode => f.write_str("decode"),
            Self::Empty => f.write_str("empty"),
        }
    }
}

/// Failures obtaining an OAuth client-credentials token.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("oauth credentials missing")]
    MissingCredentials,

    #[error("token request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("malformed token response: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("token response contained an empty access_token")]
    EmptyToken,

    #[error("token expiry out of range: expires_in={expires_in}")]
    InvalidExpiry { expires_in: i64 },
}

/// Errors surfaced to callers of [`crate::ListingsClient`].
///
/// Search-style reads never return these; see [`crate::fallback`].
#[derive(Debug, Error)]
pub enum ListingsError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("property id is required")]
    MissingPropertyId,

    #[error("city is required")]
    MissingCity,

    #[error("property not found: {id}")]
    PropertyNotFound { id: String },

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("lead rejected with HTTP {status}: {body}")]
    LeadRejected { status: u16, body: String },

    #[error("user token is required for shortlist requests")]
    MissingUserToken,

    #[error("upstream rejected the user token")]
    Unauthorized,

    #[error("shortlist {action} rejected with HTTP {status}: {body}")]
    ShortlistRejected {
        action: &'static str,
        status: u16,
        body: String,
    },
}
