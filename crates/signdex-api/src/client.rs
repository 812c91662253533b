//! Dictionary service HTTP client.
//!
//! Low-level client for the sign dictionary web API: request building,
//! status mapping, and response parsing into core types. Every endpoint
//! lives under one base URL; all requests are plain GETs.

use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use signdex_core::Sign;

use crate::error::{ApiError, ApiResult};

/// Default base URL for the dictionary service.
pub const DEFAULT_BASE_URL: &str = "https://cws.auckland.ac.nz/nzsl/api";

/// Dictionary service client.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DictionaryClient {
    /// Creates a new client for the given base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        let base_url: String = base_url.into();
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client for the default service with a 10 second timeout.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(10))
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the service version string.
    pub async fn version(&self) -> ApiResult<String> {
        self.get_text(self.endpoint("Version")).await
    }

    /// Fetches the service logo image bytes.
    pub async fn logo(&self) -> ApiResult<Vec<u8>> {
        let response = self.send(self.endpoint("Logo")).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(format!("failed to read response: {}", e)))?;
        Ok(bytes.to_vec())
    }

    /// Fetches the full sign list.
    pub async fn all_signs(&self) -> ApiResult<Vec<Sign>> {
        let body = self.get_text(self.endpoint("AllSigns")).await?;
        parse_signs(&body)
    }

    /// Searches signs by term.
    ///
    /// The term is trimmed first; a term that trims to nothing
    /// short-circuits to an empty list without touching the network.
    pub async fn search_signs(&self, term: &str) -> ApiResult<Vec<Sign>> {
        let term = term.trim();
        if term.is_empty() {
            debug!("empty search term, skipping request");
            return Ok(Vec::new());
        }

        let url = format!("{}/Signs/{}", self.base_url, urlencoding::encode(term));
        let body = self.get_text(url).await?;
        parse_signs(&body)
    }

    /// Returns the image URL for a sign, without issuing a request.
    pub fn sign_image_url(&self, id: u32) -> String {
        format!("{}/SignImage/{}", self.base_url, id)
    }

    /// Resolves a sign's image, returning the final URL after redirects.
    pub async fn resolve_sign_image(&self, id: u32) -> ApiResult<String> {
        let response = self.send(self.sign_image_url(id)).await?;
        Ok(response.url().to_string())
    }

    /// Fetches the number of event records the service holds.
    pub async fn event_count(&self) -> ApiResult<usize> {
        let body = self.get_text(self.endpoint("EventCount")).await?;
        parse_event_count(&body)
    }

    /// Fetches one raw event record by index.
    pub async fn event(&self, index: usize) -> ApiResult<String> {
        self.get_text(format!("{}/Event/{}", self.base_url, index))
            .await
    }

    /// Fetches every event record.
    ///
    /// Records are requested concurrently and independently; a record that
    /// fails to fetch is logged and skipped, the rest still render. Results
    /// are re-ordered by index so callers get a stable listing.
    pub async fn events(&self) -> ApiResult<Vec<String>> {
        let count = self.event_count().await?;
        debug!(count, "fetching event records");

        let mut set = JoinSet::new();
        for index in 0..count {
            let client = self.clone();
            set.spawn(async move { (index, client.event(index).await) });
        }

        let mut records: Vec<(usize, String)> = Vec::with_capacity(count);
        while let Some(joined) = set.join_next().await {
            let (index, result) = joined
                .map_err(|e| ApiError::internal(format!("event fetch task failed: {}", e)))?;
            match result {
                Ok(text) => records.push((index, text)),
                Err(e) => warn!(index, error = %e, "failed to fetch event record"),
            }
        }

        records.sort_by_key(|(index, _)| *index);
        Ok(records.into_iter().map(|(_, text)| text).collect())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send(&self, url: String) -> ApiResult<reqwest::Response> {
        let response = self.http_client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::network("request timeout")
            } else if e.is_connect() {
                ApiError::network(format!("connection failed: {}", e))
            } else {
                ApiError::network(format!("request failed: {}", e))
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::not_found(format!("no such resource: {}", url)));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiError::rate_limited("rate limit exceeded"));
        }

        if status == reqwest::StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::bad_request(format!("rejected request: {}", body)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::server(format!(
                "API error ({}): {}",
                status, body
            )));
        }

        Ok(response)
    }

    async fn get_text(&self, url: impl Into<String>) -> ApiResult<String> {
        let response = self.send(url.into()).await?;
        response
            .text()
            .await
            .map_err(|e| ApiError::network(format!("failed to read response: {}", e)))
    }
}

/// Parses the JSON sign list body.
fn parse_signs(body: &str) -> ApiResult<Vec<Sign>> {
    serde_json::from_str(body)
        .map_err(|e| ApiError::invalid_response(format!("failed to parse sign list: {}", e)))
}

/// Parses the plain-text event count body.
fn parse_event_count(body: &str) -> ApiResult<usize> {
    body.trim().parse().map_err(|_| {
        ApiError::invalid_response(format!("event count is not a number: {:?}", body.trim()))
    })
}
