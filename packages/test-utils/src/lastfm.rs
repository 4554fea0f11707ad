//! Mock Last.fm web service
//!
//! Every Last.fm method is a `GET` on the same endpoint, distinguished by the
//! `method` query parameter, so mocks here match on that parameter.

use std::collections::BTreeMap;

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock endpoint is served under
pub const API_PATH: &str = "/2.0/";

/// Mock Last.fm server
///
/// Wraps a [`wiremock::MockServer`] and records every request so tests can
/// inspect the exact query the client sent.
pub struct MockLastfmServer {
    server: MockServer,
}

impl MockLastfmServer {
    /// Start a new mock Last.fm server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Endpoint URL to use as the client's `api_url`
    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), API_PATH)
    }

    /// Respond to `method` (e.g. `album.getInfo`) with `body`
    pub async fn mock_method(&self, api_method: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(API_PATH))
            .and(query_param("method", api_method))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond to every call with a Last.fm error envelope
    ///
    /// Last.fm sends error envelopes with a 4xx status for most codes.
    pub async fn mock_error(&self, code: i32, message: &str) {
        Mock::given(method("GET"))
            .and(path(API_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": code,
                "message": message
            })))
            .mount(&self.server)
            .await;
    }

    /// Respond to every call with HTTP 429
    pub async fn mock_rate_limited(&self) {
        Mock::given(method("GET"))
            .and(path(API_PATH))
            .respond_with(ResponseTemplate::new(429))
            .mount(&self.server)
            .await;
    }

    /// Respond to every call with HTTP 503 and a non-JSON body
    pub async fn mock_server_error(&self) {
        Mock::given(method("GET"))
            .and(path(API_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&self.server)
            .await;
    }

    /// Number of requests received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    /// Decoded query parameters of every request received, in arrival order
    pub async fn received_queries(&self) -> Vec<BTreeMap<String, String>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                request
                    .url
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .collect()
    }

    /// Get reference to the underlying mock server for custom mock setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }
}

/// Canned response bodies shaped like the real service's
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn token(token: &str) -> Value {
        json!({ "token": token })
    }

    pub fn session(name: &str, key: &str) -> Value {
        json!({
            "session": {
                "name": name,
                "key": key,
                "subscriber": 0
            }
        })
    }

    pub fn album_info(artist: &str, album: &str) -> Value {
        json!({
            "album": {
                "name": album,
                "artist": artist,
                "mbid": "",
                "url": format!("https://www.last.fm/music/{}/{}", artist, album),
                "listeners": "1000",
                "playcount": "5000",
                "tags": { "tag": [{ "name": "rock", "url": "https://www.last.fm/tag/rock" }] }
            }
        })
    }

    pub fn top_tags(names: &[&str]) -> Value {
        let tags: Vec<Value> = names
            .iter()
            .map(|name| json!({ "name": name, "count": 100 }))
            .collect();
        json!({ "toptags": { "tag": tags } })
    }

    /// Body returned by write methods such as `track.love`
    pub fn empty() -> Value {
        json!({})
    }
}
