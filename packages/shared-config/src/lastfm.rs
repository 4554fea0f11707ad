//! Last.fm web service configuration

use std::fmt;

use url::Url;

use crate::{
    get_env_or_default, get_optional_env, get_required_env, parse_env, ConfigError, ConfigResult,
};

/// Default Last.fm API endpoint
pub const DEFAULT_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_USER_AGENT: &str = "lastfm-client/0.1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Last.fm client configuration
#[derive(Clone)]
pub struct LastfmConfig {
    /// API endpoint the client sends every call to
    pub api_url: String,

    /// Public API key
    pub api_key: String,

    /// Shared secret used to sign authenticated calls
    pub api_secret: String,

    /// Session key from a previous authentication handshake
    pub session_key: Option<String>,

    /// ISO 639-1 language for localized responses (biographies, wikis)
    pub language: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Retry attempts for transient transport failures
    pub max_retries: u32,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl fmt::Debug for LastfmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LastfmConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field(
                "session_key",
                &self.session_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("language", &self.language)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl LastfmConfig {
    /// Create a configuration with the given credentials and defaults for
    /// everything else (useful for testing)
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            session_key: None,
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Load Last.fm configuration from environment variables
    ///
    /// `LASTFM_API_KEY` and `LASTFM_API_SECRET` are required; everything else
    /// falls back to a default.
    pub fn from_env() -> ConfigResult<Self> {
        let api_key = get_required_env("LASTFM_API_KEY")?;
        let api_secret = get_required_env("LASTFM_API_SECRET")?;

        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "LASTFM_API_KEY".to_string(),
                "API key cannot be empty".to_string(),
            ));
        }
        if api_secret.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "LASTFM_API_SECRET".to_string(),
                "API secret cannot be empty".to_string(),
            ));
        }

        let config = Self {
            api_url: get_env_or_default("LASTFM_API_URL", DEFAULT_API_URL),
            api_key,
            api_secret,
            session_key: get_optional_env("LASTFM_SESSION_KEY"),
            language: get_env_or_default("LASTFM_LANG", DEFAULT_LANGUAGE),
            timeout_secs: parse_env("LASTFM_TIMEOUT", DEFAULT_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_env(
                "LASTFM_CONNECT_TIMEOUT",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            max_retries: parse_env("LASTFM_MAX_RETRIES", DEFAULT_MAX_RETRIES)?,
            user_agent: get_env_or_default("LASTFM_USER_AGENT", DEFAULT_USER_AGENT),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a `.env` file (if any) and then read the environment
    pub fn from_dotenv() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Point the configuration at a different endpoint (mock servers, proxies)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Attach a session key obtained from `auth.getSession`
    pub fn with_session_key(mut self, session_key: impl Into<String>) -> Self {
        self.session_key = Some(session_key.into());
        self
    }

    /// Check that the endpoint is an absolute http(s) URL
    pub fn validate(&self) -> ConfigResult<()> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| ConfigError::InvalidUrl("LASTFM_API_URL".to_string(), e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(
                "LASTFM_API_URL".to_string(),
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 9] = [
        "LASTFM_API_KEY",
        "LASTFM_API_SECRET",
        "LASTFM_SESSION_KEY",
        "LASTFM_API_URL",
        "LASTFM_LANG",
        "LASTFM_TIMEOUT",
        "LASTFM_CONNECT_TIMEOUT",
        "LASTFM_MAX_RETRIES",
        "LASTFM_USER_AGENT",
    ];

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let kvs: Vec<(&str, Option<&str>)> = ALL_VARS
            .iter()
            .map(|name| {
                let value = vars.iter().find(|(k, _)| k == name).map(|(_, v)| *v);
                (*name, value)
            })
            .collect();
        temp_env::with_vars(kvs, f);
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = LastfmConfig::new("key", "secret");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.language, "en");
        assert_eq!(config.max_retries, 3);
        assert!(config.session_key.is_none());
    }

    #[test]
    fn test_from_env_minimal() {
        with_env(
            &[("LASTFM_API_KEY", "key"), ("LASTFM_API_SECRET", "secret")],
            || {
                let config = LastfmConfig::from_env().unwrap();
                assert_eq!(config.api_key, "key");
                assert_eq!(config.api_secret, "secret");
                assert_eq!(config.api_url, DEFAULT_API_URL);
                assert_eq!(config.timeout_secs, 10);
                assert!(config.session_key.is_none());
            },
        );
    }

    #[test]
    fn test_from_env_full() {
        with_env(
            &[
                ("LASTFM_API_KEY", "key"),
                ("LASTFM_API_SECRET", "secret"),
                ("LASTFM_SESSION_KEY", "session"),
                ("LASTFM_API_URL", "http://localhost:8080/2.0/"),
                ("LASTFM_LANG", "sv"),
                ("LASTFM_TIMEOUT", "30"),
                ("LASTFM_MAX_RETRIES", "0"),
            ],
            || {
                let config = LastfmConfig::from_env().unwrap();
                assert_eq!(config.session_key.as_deref(), Some("session"));
                assert_eq!(config.api_url, "http://localhost:8080/2.0/");
                assert_eq!(config.language, "sv");
                assert_eq!(config.timeout_secs, 30);
                assert_eq!(config.max_retries, 0);
            },
        );
    }

    #[test]
    fn test_from_env_missing_secret() {
        with_env(&[("LASTFM_API_KEY", "key")], || {
            let result = LastfmConfig::from_env();
            assert!(matches!(
                result,
                Err(ConfigError::MissingEnvVar(name)) if name == "LASTFM_API_SECRET"
            ));
        });
    }

    #[test]
    fn test_from_env_empty_key() {
        with_env(
            &[("LASTFM_API_KEY", " "), ("LASTFM_API_SECRET", "secret")],
            || {
                let result = LastfmConfig::from_env();
                assert!(matches!(result, Err(ConfigError::InvalidValue(_, _))));
            },
        );
    }

    #[test]
    fn test_from_env_invalid_url() {
        with_env(
            &[
                ("LASTFM_API_KEY", "key"),
                ("LASTFM_API_SECRET", "secret"),
                ("LASTFM_API_URL", "not a url"),
            ],
            || {
                let result = LastfmConfig::from_env();
                assert!(matches!(result, Err(ConfigError::InvalidUrl(_, _))));
            },
        );
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = LastfmConfig::new("key", "secret").with_api_url("ftp://example.com/");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl(_, _))
        ));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = LastfmConfig::new("key", "very-secret").with_session_key("session-123");
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("very-secret"));
        assert!(!debug_str.contains("session-123"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
