//! Pluggable search-engine backends.
//!
//! The original tool hardcoded its search engine; here the engine is a
//! [`SearchBackend`] trait object selected by configuration, so the lookup
//! logic is written once and tests can point a backend at a local mock
//! server.

/// DuckDuckGo HTML-endpoint backend.
pub mod duckduckgo;
/// Google web-search backend.
pub mod google;

use crate::config::{ScoutConfig, SearchBackendKind};
use crate::types::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

pub use duckduckgo::DuckDuckGoBackend;
pub use google::GoogleBackend;

/// Build an HTTP client with the configured User-Agent. A rejected header
/// value (or any other builder error) falls back to the stock client with a
/// diagnostic instead of failing the lookup.
pub(crate) fn http_client(user_agent: &str) -> reqwest::Client {
    match reqwest::Client::builder().user_agent(user_agent).build() {
        Ok(client) => client,
        Err(e) => {
            warn!(user_agent, error = %e, "invalid HTTP client config, using default client");
            reqwest::Client::new()
        }
    }
}

/// A search engine scraped for candidate documentation URLs.
///
/// `search` returns the raw result-page body. No result parsing happens
/// here; URL extraction is the caller's concern.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Backend name for logging and diagnostics.
    fn name(&self) -> &str;

    /// Run a query and return the raw result page as text.
    async fn search(&self, query: &str) -> Result<String>;
}

/// Build the configured backend.
pub fn backend_from_config(config: &ScoutConfig) -> Arc<dyn SearchBackend> {
    let base_url = config.search.base_url.clone();
    match config.search.backend {
        SearchBackendKind::DuckDuckGo => {
            Arc::new(DuckDuckGoBackend::new(&config.http.user_agent, base_url))
        }
        SearchBackendKind::Google => {
            Arc::new(GoogleBackend::new(&config.http.user_agent, base_url))
        }
    }
}
