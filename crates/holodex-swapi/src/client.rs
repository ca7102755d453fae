//! HTTP client for the upstream catalog API

use async_stream::try_stream;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::category::Category;
use crate::source::{CatalogSource, ExternalRecord, RecordStream};

/// Base URL of the public catalog mirror.
pub const DEFAULT_BASE_URL: &str = "https://swapi.py4e.com/api";

/// Errors that can occur while fetching a page from the upstream catalog
#[derive(Error, Debug)]
pub enum SwapiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Http { url: String, status: StatusCode },

    #[error("failed to decode page {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Retry behavior for transient page-fetch failures.
///
/// Mirrors the upstream service's observed flakiness: rate-limit and
/// server-side statuses are worth retrying, anything else is not.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts per page, including the first one
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on each subsequent retry
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(2),
        }
    }
}

/// One page of the upstream listing: records plus the continuation URL.
#[derive(Debug, Deserialize)]
struct SwapiPage {
    next: Option<String>,
    #[serde(default)]
    results: Vec<ExternalRecord>,
}

/// Client for the upstream catalog API
pub struct SwapiClient {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl SwapiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("Holodex/1.0")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn first_page_url(&self, category: Category) -> String {
        format!("{}/{}/?page=1", self.base_url, category)
    }

    /// Fetch one page, retrying transient failures per the retry policy.
    async fn fetch_page(&self, url: &str) -> Result<SwapiPage, SwapiError> {
        let mut delay = self.retry.base_delay;
        let mut attempt = 1;

        loop {
            match self.try_fetch(url).await {
                Ok(page) => return Ok(page),
                Err(e) if attempt < self.retry.max_attempts && is_transient(&e) => {
                    warn!(
                        "Transient failure fetching {} (attempt {}/{}): {}",
                        url, attempt, self.retry.max_attempts, e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<SwapiPage, SwapiError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| SwapiError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SwapiError::Http {
                url: url.to_string(),
                status,
            });
        }

        response.json().await.map_err(|source| SwapiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl Default for SwapiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CatalogSource for SwapiClient {
    fn records(&self, category: Category) -> RecordStream<'_> {
        Box::pin(try_stream! {
            let mut next = Some(self.first_page_url(category));

            while let Some(url) = next {
                debug!("Fetching {} page: {}", category, url);
                let page = self.fetch_page(&url).await?;
                next = page.next;

                for record in page.results {
                    yield record;
                }
            }
        })
    }
}

fn is_transient(error: &SwapiError) -> bool {
    match error {
        SwapiError::Http { status, .. } => {
            matches!(status.as_u16(), 403 | 429 | 500 | 502 | 503 | 504)
        }
        SwapiError::Request { source, .. } => source.is_timeout() || source.is_connect(),
        SwapiError::Decode { .. } => false,
    }
}
