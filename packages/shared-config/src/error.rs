//! Errors raised while loading the Last.fm client configuration

use thiserror::Error;

/// Why a [`LastfmConfig`](crate::LastfmConfig) could not be built
///
/// Each variant carries the name of the offending environment variable so
/// hosts can point users at the right setting.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `LASTFM_API_KEY` or `LASTFM_API_SECRET` is not set
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A blank API key or secret, or a non-numeric timeout or retry count
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),

    /// `LASTFM_API_URL` does not parse, or is not an http(s) endpoint
    #[error("invalid URL format for {0}: {1}")]
    InvalidUrl(String, String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
