//! Last.fm API client implementation

use std::fmt;
use std::sync::Arc;

use lastfm_config::{ConfigError, LastfmConfig};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::api::{Album, Auth, Chart, Geo, Library, Tag, Track, User};
use crate::auth::{Credentials, Session};
use crate::call::{self, CallSpec, SignedQuery};
use crate::error::{LastfmError, LastfmResult};
use crate::params::ParameterSet;
use crate::response;
use crate::transport::{HttpTransport, Transport};

/// Error code returned for an invalid API key
const INVALID_API_KEY: i32 = 10;

/// Last.fm API client
///
/// Cheap to clone; clones share credentials and transport but each holds its
/// own copy of the session state.
#[derive(Clone)]
pub struct LastfmClient {
    transport: Arc<dyn Transport>,
    credentials: Arc<Credentials>,
    session: Session,
    api_url: String,
    language: Option<String>,
}

/// API key validation status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyStatus {
    /// API key is valid
    Valid,
    /// API key is invalid
    Invalid,
    /// Could not determine validity (network error, etc.)
    Unknown(String),
}

impl fmt::Debug for LastfmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LastfmClient")
            .field("api_url", &self.api_url)
            .field("credentials", &self.credentials)
            .field("session", &self.session)
            .field("language", &self.language)
            .finish()
    }
}

fn config_error(e: ConfigError) -> LastfmError {
    match e {
        ConfigError::MissingEnvVar(name) if name == "LASTFM_API_KEY" => LastfmError::MissingApiKey,
        ConfigError::MissingEnvVar(name) if name == "LASTFM_API_SECRET" => {
            LastfmError::MissingApiSecret
        }
        other => LastfmError::InvalidInput(other.to_string()),
    }
}

impl LastfmClient {
    /// Create a client using the `reqwest` transport
    ///
    /// # Errors
    /// - `LastfmError::MissingApiKey` / `MissingApiSecret` for empty credentials
    /// - `LastfmError::InvalidInput` if the endpoint URL is invalid
    pub fn new(config: &LastfmConfig) -> LastfmResult<Self> {
        let transport = HttpTransport::new(config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client over a custom transport
    pub fn with_transport(
        config: &LastfmConfig,
        transport: Arc<dyn Transport>,
    ) -> LastfmResult<Self> {
        config.validate().map_err(config_error)?;
        let credentials = Credentials::new(&config.api_key, &config.api_secret)?;
        let session = config
            .session_key
            .as_deref()
            .map(Session::with_key)
            .unwrap_or_default();
        let language = Some(config.language.clone()).filter(|l| !l.trim().is_empty());

        Ok(Self {
            transport,
            credentials: Arc::new(credentials),
            session,
            api_url: config.api_url.clone(),
            language,
        })
    }

    /// Create a Last.fm client from environment variables
    ///
    /// See [`LastfmConfig::from_env`] for the variables read.
    pub fn from_env() -> LastfmResult<Self> {
        let config = LastfmConfig::from_env().map_err(config_error)?;
        Self::new(&config)
    }

    /// Attach a session key (builder form)
    pub fn with_session_key(mut self, session_key: impl Into<String>) -> Self {
        self.set_session_key(session_key);
        self
    }

    /// Store the session key obtained from the authentication handshake
    pub fn set_session_key(&mut self, session_key: impl Into<String>) {
        self.session = Session::with_key(session_key);
    }

    /// Forget the session key
    pub fn clear_session(&mut self) {
        self.session = Session::anonymous();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Language for localized responses (ISO 639-1, e.g. `en`, `sv`)
    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.language = Some(lang.into()).filter(|l| !l.trim().is_empty());
        self
    }

    pub fn get_language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Build the exact query a call would send, without sending it
    pub fn build_query(&self, spec: &CallSpec, params: &ParameterSet) -> LastfmResult<SignedQuery> {
        call::build(spec, params, &self.credentials, &self.session)
    }

    /// Invoke a remote method and return its JSON body
    ///
    /// # Errors
    /// - `LastfmError::AuthRequired` before any I/O if `spec` needs a session
    /// - transport failures, unchanged
    /// - `InvalidService` / `InvalidMethod` / `Api` for error envelopes
    #[instrument(skip(self, params), fields(method = %spec, auth = ?spec.auth))]
    pub async fn call(&self, spec: &CallSpec, params: ParameterSet) -> LastfmResult<Value> {
        let query = self.build_query(spec, &params)?;

        debug!(signed = query.is_signed(), "Dispatching Last.fm call");

        let body = self.transport.get(&self.api_url, &query).await?;
        let result = response::interpret(body);

        if let Err(e) = &result {
            debug!(error = %e, "Last.fm call failed");
        }
        result
    }

    /// Invoke a remote method and deserialize the body
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        spec: &CallSpec,
        params: ParameterSet,
    ) -> LastfmResult<T> {
        let body = self.call(spec, params).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub fn album(&self) -> Album<'_> {
        Album::new(self)
    }

    pub fn track(&self) -> Track<'_> {
        Track::new(self)
    }

    /// Methods of the `user` section for one user
    pub fn user(&self, user: impl Into<String>) -> User<'_> {
        User::new(self, user.into())
    }

    pub fn tag(&self) -> Tag<'_> {
        Tag::new(self)
    }

    pub fn chart(&self) -> Chart<'_> {
        Chart::new(self)
    }

    pub fn geo(&self) -> Geo<'_> {
        Geo::new(self)
    }

    pub fn library(&self) -> Library<'_> {
        Library::new(self)
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    /// Check if the API key is valid by making a simple request
    ///
    /// Returns `ApiKeyStatus` indicating whether the key is valid, invalid,
    /// or if the check could not be completed due to network issues.
    pub async fn validate_api_key(&self) -> ApiKeyStatus {
        match self.chart().get_top_tags(Default::default()).await {
            Ok(_) => ApiKeyStatus::Valid,
            Err(LastfmError::Api {
                code: Some(INVALID_API_KEY),
                ..
            }) => ApiKeyStatus::Invalid,
            Err(e) => ApiKeyStatus::Unknown(e.to_string()),
        }
    }
}
