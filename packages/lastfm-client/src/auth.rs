//! Credentials and session state

use std::fmt;

use crate::error::{LastfmError, LastfmResult};

/// Shared secret used only to compute request signatures
///
/// The value is never transmitted and never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(String);

impl ApiSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret([REDACTED])")
    }
}

/// API key and shared secret pair
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: ApiSecret,
}

impl Credentials {
    /// # Errors
    /// - `LastfmError::MissingApiKey` if the key is empty
    /// - `LastfmError::MissingApiSecret` if the secret is empty
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> LastfmResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.trim().is_empty() {
            return Err(LastfmError::MissingApiKey);
        }
        if api_secret.trim().is_empty() {
            return Err(LastfmError::MissingApiSecret);
        }
        Ok(Self {
            api_key,
            api_secret: ApiSecret(api_secret),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Opaque session key returned by `auth.getSession`
#[derive(Clone, PartialEq, Eq)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionKey([REDACTED])")
    }
}

/// Authentication state of a client
///
/// A session key present means "authenticated".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    session_key: Option<SessionKey>,
}

impl Session {
    /// Unauthenticated session
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        let key = key.into();
        if key.trim().is_empty() {
            return Self::anonymous();
        }
        Self {
            session_key: Some(SessionKey(key)),
        }
    }

    pub fn key(&self) -> Option<&SessionKey> {
        self.session_key.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_key.is_some()
    }
}
