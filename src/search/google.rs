//! Google search backend.
//!
//! Scrapes the standard `/search` results page. Google serves markup that
//! varies by client and may interstitial-block unattended traffic; this
//! backend stays best-effort, matching the tool's overall contract.

use crate::search::SearchBackend;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://www.google.com";

/// Search backend scraping Google's results page.
pub struct GoogleBackend {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleBackend {
    /// Create a backend. `base_url` overrides the live endpoint for tests.
    pub fn new(user_agent: &str, base_url: Option<String>) -> Self {
        Self {
            client: crate::search::http_client(user_agent),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl SearchBackend for GoogleBackend {
    fn name(&self) -> &str {
        "google"
    }

    async fn search(&self, query: &str) -> Result<String> {
        let url = format!("{}/search", self.base_url);
        debug!(backend = self.name(), query, "issuing search request");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| AppError::Search(format!("Google request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| AppError::Search(format!("Google returned an error: {}", e)))?;

        response
            .text()
            .await
            .map_err(|e| AppError::Search(format!("failed to read Google response: {}", e)))
    }
}
