//! Call descriptors and query construction
//!
//! A [`CallSpec`] names one remote method and its authentication needs;
//! [`build`] turns it, the caller's [`ParameterSet`] and the client's
//! credentials into the exact [`SignedQuery`] that goes on the wire.

use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;

use crate::auth::{Credentials, Session};
use crate::error::{LastfmError, LastfmResult};
use crate::params::ParameterSet;
use crate::signer::{self, FORMAT_KEY, SIGNATURE_KEY};

/// Response format requested from the service
const RESPONSE_FORMAT: &str = "json";

/// How a remote method authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Unsigned, API key only
    Public,
    /// Signed; the session key is sent when the client has one
    Signed,
    /// Signed and a session key is mandatory
    Session,
}

/// One remote operation, e.g. `album.addTags`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSpec {
    pub section: &'static str,
    pub method: &'static str,
    pub auth: AuthMode,
}

impl CallSpec {
    pub const fn public(section: &'static str, method: &'static str) -> Self {
        Self {
            section,
            method,
            auth: AuthMode::Public,
        }
    }

    pub const fn signed(section: &'static str, method: &'static str) -> Self {
        Self {
            section,
            method,
            auth: AuthMode::Signed,
        }
    }

    pub const fn session(section: &'static str, method: &'static str) -> Self {
        Self {
            section,
            method,
            auth: AuthMode::Session,
        }
    }

    /// Whether the call carries an `api_sig`
    pub fn requires_auth(&self) -> bool {
        !matches!(self.auth, AuthMode::Public)
    }

    /// Whether the call cannot be made without a session key
    pub fn requires_session(&self) -> bool {
        matches!(self.auth, AuthMode::Session)
    }

    /// Same method with a different authentication mode
    pub const fn with_auth(self, auth: AuthMode) -> Self {
        Self { auth, ..self }
    }

    /// Remote method name (`section.method`)
    pub fn method_name(&self) -> String {
        format!("{}.{}", self.section, self.method)
    }
}

impl fmt::Display for CallSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.method)
    }
}

/// The final key/value set sent to the service
///
/// Keys are unique and iterate in byte order. There is no way to change a
/// query after [`build`] produced it, so a signature can't go stale.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedQuery {
    pairs: BTreeMap<String, String>,
}

impl SignedQuery {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.pairs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn is_signed(&self) -> bool {
        self.pairs.contains_key(SIGNATURE_KEY)
    }

    /// URL-encoded form (`a=1&b=2`)
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl fmt::Debug for SignedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            if k == "sk" {
                map.entry(&k, &"[REDACTED]");
            } else {
                map.entry(&k, &v);
            }
        }
        map.finish()
    }
}

/// Assemble the query for one call
///
/// # Errors
/// `LastfmError::AuthRequired` when `spec` needs a session and `session`
/// has none. No other failure is possible; this never touches the network.
pub fn build(
    spec: &CallSpec,
    params: &ParameterSet,
    credentials: &Credentials,
    session: &Session,
) -> LastfmResult<SignedQuery> {
    if spec.requires_session() && !session.is_authenticated() {
        return Err(LastfmError::AuthRequired);
    }

    let mut pairs = BTreeMap::new();
    pairs.insert("method".to_string(), spec.method_name());
    pairs.insert("api_key".to_string(), credentials.api_key().to_string());
    pairs.insert(FORMAT_KEY.to_string(), RESPONSE_FORMAT.to_string());
    for (key, value) in params.present() {
        pairs.insert(key.to_string(), value);
    }

    if !spec.requires_auth() {
        return Ok(SignedQuery { pairs });
    }

    if let Some(key) = session.key() {
        pairs.insert("sk".to_string(), key.as_str().to_string());
    }
    // Signing must come last
    let signature = signer::sign(
        pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        credentials.api_secret(),
    );
    pairs.insert(SIGNATURE_KEY.to_string(), signature);

    Ok(SignedQuery { pairs })
}
