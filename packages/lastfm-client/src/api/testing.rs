//! Spy transport shared by the section tests
//!
//! Mirrors `tests/common/mocks.rs`, which cannot reach crate-private types.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lastfm_config::LastfmConfig;
use serde_json::{json, Value};

use crate::call::SignedQuery;
use crate::client::LastfmClient;
use crate::error::LastfmResult;
use crate::transport::Transport;

/// Transport that records every query and answers with a canned body
pub(crate) struct SpyTransport {
    call_count: AtomicUsize,
    queries: Mutex<Vec<SignedQuery>>,
    body: Value,
}

impl SpyTransport {
    pub(crate) fn new() -> Arc<Self> {
        Self::responding(json!({}))
    }

    pub(crate) fn responding(body: Value) -> Arc<Self> {
        Arc::new(Self {
            call_count: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            body,
        })
    }

    /// Number of times the transport was invoked
    pub(crate) fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub(crate) fn last_query(&self) -> SignedQuery {
        self.queries
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("transport was never called")
    }
}

#[async_trait]
impl Transport for SpyTransport {
    async fn get(&self, _url: &str, query: &SignedQuery) -> LastfmResult<Value> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.body.clone())
    }
}

pub(crate) fn client(transport: &Arc<SpyTransport>) -> LastfmClient {
    let transport: Arc<dyn Transport> = transport.clone();
    LastfmClient::with_transport(&LastfmConfig::new("K", "S"), transport).unwrap()
}

pub(crate) fn authed_client(transport: &Arc<SpyTransport>) -> LastfmClient {
    client(transport).with_session_key("SESSION")
}
