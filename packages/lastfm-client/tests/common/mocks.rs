//! Spy transport that records queries instead of sending them

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lastfm_client::{LastfmResult, SignedQuery, Transport};
use serde_json::{json, Value};

/// Transport that records every query and answers with a canned body
pub struct SpyTransport {
    call_count: AtomicUsize,
    queries: Mutex<Vec<SignedQuery>>,
    body: Value,
}

impl SpyTransport {
    pub fn new() -> Arc<Self> {
        Self::responding(json!({}))
    }

    pub fn responding(body: Value) -> Arc<Self> {
        Arc::new(Self {
            call_count: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            body,
        })
    }

    /// Number of times the transport was invoked
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> SignedQuery {
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
