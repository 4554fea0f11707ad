//! Client construction helpers

use std::sync::Arc;

use lastfm_client::{LastfmClient, Transport};
use lastfm_config::LastfmConfig;

pub const API_KEY: &str = "K";
pub const API_SECRET: &str = "S";
pub const SESSION_KEY: &str = "SESSION";

pub fn config() -> LastfmConfig {
    LastfmConfig::new(API_KEY, API_SECRET)
}

/// Client without a session over `transport`
pub fn anonymous_client<T: Transport + 'static>(transport: &Arc<T>) -> LastfmClient {
    let transport: Arc<dyn Transport> = transport.clone();
    LastfmClient::with_transport(&config(), transport).unwrap()
}

/// Client holding [`SESSION_KEY`] over `transport`
pub fn session_client<T: Transport + 'static>(transport: &Arc<T>) -> LastfmClient {
    anonymous_client(transport).with_session_key(SESSION_KEY)
}

/// Client pointed at a mock server using the real HTTP transport
pub fn http_client(api_url: &str, session: Option<&str>) -> LastfmClient {
    let mut cfg = config().with_api_url(api_url);
    cfg.max_retries = 0;
    if let Some(key) = session {
        cfg = cfg.with_session_key(key);
    }
    LastfmClient::new(&cfg).unwrap()
}
