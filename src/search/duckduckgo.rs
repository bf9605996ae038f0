//! DuckDuckGo search backend.
//!
//! Uses the HTML-only endpoint (`html.duckduckgo.com/html/`), which serves
//! plain markup without requiring JavaScript. The response body is returned
//! as-is for pattern matching.

use crate::search::SearchBackend;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://html.duckduckgo.com";

/// Search backend scraping DuckDuckGo's HTML endpoint.
pub struct DuckDuckGoBackend {
    client: reqwest::Client,
    base_url: String,
}

impl DuckDuckGoBackend {
    /// Create a backend. `base_url` overrides the live endpoint, mainly so
    /// tests can target a local mock server.
    pub fn new(user_agent: &str, base_url: Option<String>) -> Self {
        Self {
            client: crate::search::http_client(user_agent),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl SearchBackend for DuckDuckGoBackend {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn search(&self, query: &str) -> Result<String> {
        let url = format!("{}/html/", self.base_url);
        debug!(backend = self.name(), query, "issuing search request");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| AppError::Search(format!("DuckDuckGo request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| AppError::Search(format!("DuckDuckGo returned an error: {}", e)))?;

        response
            .text()
            .await
            .map_err(|e| AppError::Search(format!("failed to read DuckDuckGo response: {}", e)))
    }
}
