//! Error envelope interpretation

use serde_json::Value;
use tracing::debug;

use crate::error::{LastfmError, LastfmResult};

const INVALID_SERVICE: i64 = 2;
const INVALID_METHOD: i64 = 3;

/// Pass a response body through, or turn its error envelope into a typed
/// failure
///
/// Envelope shape: `{"error": <code>, "message": <string>}`. The code may be
/// a JSON number or a numeric string. Any envelope resolves to some
/// `LastfmError`; nothing here panics.
pub fn interpret(body: Value) -> LastfmResult<Value> {
    if body.get("error").is_none() {
        return Ok(body);
    }

    let code = error_code(&body["error"]);
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    debug!(code = ?code, message = %message, "Last.fm returned an error envelope");

    Err(match code {
        Some(INVALID_SERVICE) => LastfmError::InvalidService,
        Some(INVALID_METHOD) => LastfmError::InvalidMethod,
        Some(other) => LastfmError::Api {
            code: i32::try_from(other).ok(),
            message,
        },
        None => LastfmError::Api {
            code: None,
            message,
        },
    })
}

fn error_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
