//! Last.fm API error types

use thiserror::Error;

/// Last.fm API client errors
#[derive(Error, Debug)]
pub enum LastfmError {
    /// API key is missing or invalid
    #[error("API key is required for Last.fm API access")]
    MissingApiKey,

    /// API secret is missing
    #[error("API secret is required for Last.fm API access")]
    MissingApiSecret,

    /// Invalid input provided to the client
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required argument (or argument combination) was not supplied
    #[error("Missing required parameter: {0}")]
    MissingRequiredParameter(String),

    /// More than the allowed number of tags in a single call
    #[error("Too many tags: {count} (max 10)")]
    TooManyTags { count: usize },

    /// Time period is not one of the accepted tokens
    #[error("Invalid period '{0}' (expected overall, 7day, 1month, 3month, 6month or 12month)")]
    InvalidPeriod(String),

    /// A username is needed because no session is available
    #[error("A user is required unless the client is authenticated")]
    UserRequiredUnlessAuth,

    /// The method needs a session key and none is set
    #[error("This method requires an authenticated session")]
    AuthRequired,

    /// Last.fm error 2: the service does not exist
    #[error("Invalid service: this service does not exist")]
    InvalidService,

    /// Last.fm error 3: no method with that name in the package
    #[error("Invalid method: no method with that name in this package")]
    InvalidMethod,

    /// Any other Last.fm error envelope
    #[error("Last.fm API error {}: {message}", display_code(.code))]
    Api { code: Option<i32>, message: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("Failed to parse Last.fm response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Non-JSON reply with an unexpected HTTP status
    #[error("Last.fm returned HTTP {status}")]
    UnexpectedStatus { status: u16 },

    /// Rate limited by Last.fm
    #[error("Rate limited by Last.fm API")]
    RateLimited,

    /// Request timeout
    #[error("Request to Last.fm timed out")]
    Timeout,
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "?".to_string(), |c| c.to_string())
}

impl LastfmError {
    /// Check if this error is retryable (transient failure)
    ///
    /// Retries on:
    /// - Timeouts
    /// - Rate limiting
    /// - Transport errors (connect, timeout)
    /// - Server errors (5xx)
    ///
    /// Service error envelopes and local validation failures are never retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            LastfmError::Timeout | LastfmError::RateLimited => true,
            LastfmError::UnexpectedStatus { status } => *status >= 500,
            LastfmError::Http(e) => {
                // Retry on transport issues
                if e.is_timeout() || e.is_connect() {
                    return true;
                }
                // Retry on server errors (5xx) but not client errors (4xx)
                matches!(e.status(), Some(status) if status.is_server_error())
            }
            _ => false,
        }
    }

    /// True for failures raised before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            LastfmError::MissingApiKey
                | LastfmError::MissingApiSecret
                | LastfmError::InvalidInput(_)
                | LastfmError::MissingRequiredParameter(_)
                | LastfmError::TooManyTags { .. }
                | LastfmError::InvalidPeriod(_)
                | LastfmError::UserRequiredUnlessAuth
                | LastfmError::AuthRequired
        )
    }

    /// Service error code, when the failure came from an error envelope
    pub fn service_code(&self) -> Option<i32> {
        match self {
            LastfmError::InvalidService => Some(2),
            LastfmError::InvalidMethod => Some(3),
            LastfmError::Api { code, .. } => *code,
            _ => None,
        }
    }
}

/// Result type for Last.fm operations
pub type LastfmResult<T> = Result<T, LastfmError>;
