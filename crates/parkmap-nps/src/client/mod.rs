//! HTTP client for the NPS Data API (`developer.nps.gov`).
//!
//! Wraps `reqwest` with the `X-Api-Key` header, a bounded per-request timeout,
//! retry on transient failures, and the listing-envelope checks in
//! [`RawPage::from_body`]. Multi-page fetching lives in [`pages`].

mod pages;

use std::time::Duration;

use parkmap_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::NpsError;
use crate::retry::retry_with_backoff;
use crate::types::RawPage;

const DEFAULT_BASE_URL: &str = "https://developer.nps.gov/api/v1";
const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for the NPS Data API.
///
/// Use [`NpsClient::new`] for production or [`NpsClient::with_base_url`] to
/// point at a mock server in tests. Retries are off until
/// [`NpsClient::with_retry`] is called.
pub struct NpsClient {
    client: Client,
    api_key: String,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl NpsClient {
    /// Creates a client pointed at the production NPS API.
    ///
    /// # Errors
    ///
    /// Returns [`NpsError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, NpsError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NpsError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed, or [`NpsError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, NpsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so joining "parks" appends a segment
        // instead of replacing "v1".
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| NpsError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(NpsError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    /// Builds a client from the application config, retries included.
    ///
    /// # Errors
    ///
    /// See [`NpsClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, NpsError> {
        Ok(Self::with_base_url(
            &config.nps_api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.nps_api_base_url,
        )?
        .with_retry(config.max_retries, config.retry_backoff_base_ms))
    }

    /// Enables retry of transient failures: up to `max_retries` extra
    /// attempts per page, back-off starting at `backoff_base_ms`.
    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Builds the URL for one page of `resource` (e.g. `"parks"`).
    ///
    /// # Errors
    ///
    /// Returns [`NpsError::InvalidBaseUrl`] if `resource` cannot be joined
    /// onto the base URL.
    fn page_url(&self, resource: &str, limit: u32, start: u64) -> Result<Url, NpsError> {
        let mut url = self
            .base_url
            .join(resource.trim_start_matches('/'))
            .map_err(|e| NpsError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join resource \"{resource}\": {e}"),
            })?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("start", &start.to_string());
        Ok(url)
    }

    /// Fetches one page, retrying transient failures.
    ///
    /// # Errors
    ///
    /// - [`NpsError::Http`] on network failure after retries.
    /// - [`NpsError::UnexpectedStatus`] on a non-2xx status after retries.
    /// - [`NpsError::Decode`] if the body is not JSON.
    /// - [`NpsError::Protocol`] if the body is not a listing envelope.
    async fn fetch_page(&self, url: &Url) -> Result<RawPage, NpsError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.request_page(url)
        })
        .await
    }

    async fn request_page(&self, url: &Url) -> Result<RawPage, NpsError> {
        tracing::debug!(url = %url, "requesting NPS page");
        let response = self
            .client
            .get(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NpsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| NpsError::Decode {
                url: url.to_string(),
                source: e,
            })?;
        RawPage::from_body(url.as_str(), value)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
