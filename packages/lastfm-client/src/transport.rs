//! HTTP transport
//!
//! The call path only needs "GET this query, give me JSON". Timeouts,
//! pooling and retries of transient failures live here.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use lastfm_config::LastfmConfig;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::call::SignedQuery;
use crate::error::{LastfmError, LastfmResult};

/// Base delay for exponential backoff (milliseconds)
const RETRY_BASE_DELAY_MS: u64 = 100;

/// Upper bound on a single backoff delay (milliseconds)
const MAX_RETRY_DELAY_MS: u64 = 30_000;

/// Sends an assembled query and returns the parsed JSON body
///
/// Implement this trait to substitute the network in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, query: &SignedQuery) -> LastfmResult<Value>;
}

/// `reqwest`-backed transport with retry logic and connection pooling
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
    max_retries: u32,
    retry_base_delay_ms: u64,
    max_retry_delay_ms: u64,
}

impl HttpTransport {
    /// Build a transport from the client configuration
    pub fn new(config: &LastfmConfig) -> LastfmResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http_client,
            max_retries: config.max_retries,
            retry_base_delay_ms: RETRY_BASE_DELAY_MS,
            max_retry_delay_ms: MAX_RETRY_DELAY_MS,
        })
    }

    /// Create a transport with a custom HTTP client (for testing)
    pub fn with_client(http_client: Client, max_retries: u32) -> Self {
        Self {
            http_client,
            max_retries,
            retry_base_delay_ms: RETRY_BASE_DELAY_MS,
            max_retry_delay_ms: MAX_RETRY_DELAY_MS,
        }
    }

    /// Set retry configuration
    pub fn with_retry_config(mut self, max_retries: u32, base_delay_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.retry_base_delay_ms = base_delay_ms;
        self
    }

    /// Cap a single backoff delay
    pub fn with_max_retry_delay(mut self, max_delay_ms: u64) -> Self {
        self.max_retry_delay_ms = max_delay_ms;
        self
    }

    /// Backoff before retry number `attempt`, saturating at the configured cap
    fn retry_delay(&self, attempt: u32) -> Duration {
        let factor = 2u64.checked_pow(attempt).unwrap_or(u64::MAX);
        let delay_ms = self
            .retry_base_delay_ms
            .saturating_mul(factor)
            .min(self.max_retry_delay_ms);
        Duration::from_millis(delay_ms)
    }

    /// Execute an operation with retry logic for transient failures
    async fn with_retry<T, F, Fut>(&self, operation: F) -> LastfmResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = LastfmResult<T>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.retry_delay(attempt);
                    warn!(
                        attempt = attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Last.fm request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Make one request and handle common error cases
    async fn make_request(&self, url: &str, query: &SignedQuery) -> LastfmResult<Value> {
        let pairs: Vec<(&str, &str)> = query.iter().collect();
        let response = self
            .http_client
            .get(url)
            .query(&pairs)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LastfmError::Timeout
                } else {
                    LastfmError::Http(e)
                }
            })?;

        let status = response.status();
        // Check for rate limiting
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Last.fm API rate limited");
            return Err(LastfmError::RateLimited);
        }

        let text = response.text().await.map_err(LastfmError::Http)?;

        // Error envelopes come with 4xx statuses; hand them to the interpreter
        match serde_json::from_str::<Value>(&text) {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(LastfmError::UnexpectedStatus {
                status: status.as_u16(),
            }),
            Err(e) => Err(LastfmError::Parse(e)),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, query: &SignedQuery) -> LastfmResult<Value> {
        debug!(url = %url, keys = query.len(), "Sending Last.fm request");
        self.with_retry(|| self.make_request(url, query)).await
    }
}
