//! HTTP client for the near-Earth object feed.

use crate::cache::{Cache, NoCache};
use crate::error::{Error, Result};
use crate::retry::RetryPolicy;
use crate::types::{AsteroidSummary, Feed, FeedRequest};
use std::sync::Arc;

/// Base URL of the NeoWs REST API.
const BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";

/// Public, rate-limited API key.
const DEMO_API_KEY: &str = "DEMO_KEY";

/// Client for fetching near-Earth object feeds.
///
/// Responses are cached in the injected [`Cache`] and requests are retried
/// according to the [`RetryPolicy`].
///
/// # Example
///
/// ```ignore
/// let client = Client::with_cache(MemoryCache::with_ttl(Duration::from_secs(600)));
/// let asteroid = client
///     .fetch_featured(&FeedRequest::new("2024-06-01", "2024-06-08"))
///     .await?;
/// ```
pub struct Client<C: Cache = NoCache> {
    http: reqwest::Client,
    cache: Arc<C>,
    base_url: String,
    api_key: String,
    retry: RetryPolicy,
}

impl Client<NoCache> {
    /// Create a new client with default settings and no caching.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cache(NoCache)
    }
}

impl Default for Client<NoCache> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cache> Client<C> {
    /// Create a new client with a custom cache.
    #[must_use]
    pub fn with_cache(cache: C) -> Self {
        Self::with_http_and_cache(reqwest::Client::new(), cache)
    }

    /// Create a new client with a custom HTTP client and cache.
    #[must_use]
    pub fn with_http_and_cache(http: reqwest::Client, cache: C) -> Self {
        Self {
            http,
            cache: Arc::new(cache),
            base_url: BASE_URL.to_string(),
            api_key: DEMO_API_KEY.to_string(),
            retry: RetryPolicy::default(),
        }
    }

    /// Set a custom base URL for testing.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// URL of the feed for a date window.
    #[must_use]
    pub fn feed_url(&self, request: &FeedRequest) -> String {
        format!(
            "{}/feed?start_date={}&end_date={}&api_key={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&request.start_date),
            urlencoding::encode(&request.end_date),
            urlencoding::encode(&self.api_key),
        )
    }

    /// Fetch the feed for a date window.
    ///
    /// # Errors
    ///
    /// Returns an error if every attempt fails, the final status is not a
    /// success, or the body is not a feed.
    pub async fn fetch_feed(&self, request: &FeedRequest) -> Result<Feed> {
        let url = self.feed_url(request);
        let data = self.fetch_bytes(&url).await?;
        Feed::from_slice(&data)
    }

    /// Fetch the feed and summarize the object worth featuring.
    ///
    /// Returns `Ok(None)` when the window contains no objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed cannot be fetched or the featured
    /// object lacks usable approach data.
    pub async fn fetch_featured(&self, request: &FeedRequest) -> Result<Option<AsteroidSummary>> {
        let feed = self.fetch_feed(request).await?;
        feed.featured().map(AsteroidSummary::try_from).transpose()
    }

    /// Fetch raw bytes from a URL, using cache if available.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(data) = self.cache.get(url).await? {
            tracing::debug!(url, "cache hit");
            return Ok(data);
        }

        let mut attempt = 0;
        loop {
            tracing::debug!(url, attempt, "fetching");

            let response = self
                .http
                .get(url)
                .header(reqwest::header::ACCEPT, "application/json")
                .timeout(self.retry.timeout())
                .send()
                .await;

            let response = match response {
                Ok(response) => response,
                Err(e) if self.retry.has_attempts_after(attempt) => {
                    tracing::warn!(url, attempt, error = %e, "request failed, retrying");
                    tokio::time::sleep(self.retry.backoff_for(attempt)).await;
                    attempt += 1;
                    continue;
                }
                Err(e) => return Err(self.transport_error(url, &e)),
            };

            let status = response.status().as_u16();
            if self.retry.should_retry_status(status, attempt) {
                tracing::warn!(url, attempt, status, "retryable status, retrying");
                tokio::time::sleep(self.retry.backoff_for(attempt)).await;
                attempt += 1;
                continue;
            }
            if !response.status().is_success() {
                return Err(Error::HttpStatus {
                    url: url.to_string(),
                    status,
                });
            }

            let data = response
                .bytes()
                .await
                .map_err(|e| self.transport_error(url, &e))?;
            let data = data.to_vec();

            self.cache.put(url, data.clone()).await?;
            return Ok(data);
        }
    }

    fn transport_error(&self, url: &str, e: &reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                url: url.to_string(),
                timeout: self.retry.timeout(),
            }
        } else {
            Error::Http {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    }
}
