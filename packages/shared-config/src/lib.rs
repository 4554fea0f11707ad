//! Configuration types for the Last.fm client
//!
//! Hosts usually build a [`LastfmConfig`] from environment variables and hand
//! it to the client crate. The helpers below are shared by every `from_env`
//! constructor in this crate.

mod error;
mod lastfm;

pub use error::{ConfigError, ConfigResult};
pub use lastfm::LastfmConfig;

use std::env;

/// Helper function to get a required environment variable
pub fn get_required_env(name: &str) -> ConfigResult<String> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to get an optional environment variable
///
/// Unset and blank variables both yield `None`.
pub fn get_optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}
