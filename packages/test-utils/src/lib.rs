//! Shared test utilities for the Last.fm client workspace
//!
//! Provides a mock Last.fm web service so the client can be exercised end to
//! end without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use lastfm_test_utils::MockLastfmServer;
//!
//! #[tokio::test]
//! async fn test_with_mock() {
//!     let server = MockLastfmServer::start().await;
//!     server.mock_method("auth.getToken", serde_json::json!({"token": "abc"})).await;
//!
//!     // Point LastfmConfig::api_url at server.url()
//! }
//! ```

mod lastfm;

pub use lastfm::{fixtures, MockLastfmServer, API_PATH};
