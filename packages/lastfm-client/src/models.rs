//! Last.fm authentication handshake models
//!
//! Resource methods hand back the service's JSON untouched; only the
//! handshake responses are typed because the client consumes them itself.

use serde::{Deserialize, Serialize};

/// Request token from `auth.getToken`, valid for 60 minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub token: String,
}

/// Web service session from `auth.getSession`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Username the session belongs to
    pub name: String,
    /// Session key, valid until the user revokes it
    pub key: String,
    /// Whether the user has a paid subscription
    pub subscriber: bool,
}

impl std::fmt::Debug for SessionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionInfo")
            .field("name", &self.name)
            .field("key", &"[REDACTED]")
            .field("subscriber", &self.subscriber)
            .finish()
    }
}

// Internal response types for deserialization

#[derive(Debug, Deserialize)]
pub(crate) struct SessionResponse {
    pub session: RawSession,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSession {
    pub name: String,
    pub key: String,
    /// Sent as `0`/`1`, sometimes as a string
    #[serde(default)]
    pub subscriber: serde_json::Value,
}

impl From<RawSession> for SessionInfo {
    fn from(raw: RawSession) -> Self {
        let subscriber = match &raw.subscriber {
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::Number(n) => n.as_i64().unwrap_or(0) != 0,
            serde_json::Value::String(s) => s.trim() == "1",
            _ => false,
        };

        Self {
            name: raw.name,
            key: raw.key,
            subscriber,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_parsing() {
        let response: SessionResponse = serde_json::from_value(json!({
            "session": {
                "name": "MyLastFMUsername",
                "key": "d580d57f32848f5dcf574d1ce18d78b2",
                "subscriber": 0
            }
        }))
        .unwrap();

        let session: SessionInfo = response.session.into();
        assert_eq!(session.name, "MyLastFMUsername");
        assert_eq!(session.key, "d580d57f32848f5dcf574d1ce18d78b2");
        assert!(!session.subscriber);
    }

    #[test]
    fn test_subscriber_as_string() {
        let raw: RawSession = serde_json::from_value(json!({
            "name": "rj", "key": "k", "subscriber": "1"
        }))
        .unwrap();
        assert!(SessionInfo::from(raw).subscriber);
    }

    #[test]
    fn test_missing_subscriber_defaults_false() {
        let raw: RawSession = serde_json::from_value(json!({"name": "rj", "key": "k"})).unwrap();
        assert!(!SessionInfo::from(raw).subscriber);
    }

    #[test]
    fn test_session_info_debug_redacts_key() {
        let info = SessionInfo {
            name: "rj".to_string(),
            key: "secret-session".to_string(),
            subscriber: false,
        };
        assert!(!format!("{:?}", info).contains("secret-session"));
    }

    #[test]
    fn test_token_parsing() {
        let token: Token = serde_json::from_value(json!({"token": "abc"})).unwrap();
        assert_eq!(token.token, "abc");
    }
}
