//! Documentation discovery: the `DocFinder` lookup engine.
//!
//! Given a library name, probe candidate documentation-manifest filenames
//! in priority order ([`DocFileType::CANDIDATES`]), scrape a search-engine
//! results page per candidate, fetch the first matching URL, and derive an
//! answer from its content.
//!
//! Lookup is sequential and stateless: one search round-trip plus at most
//! one document round-trip per call, no caching, no retries. Within a call
//! the first candidate that yields any URL wins outright, even if a
//! lower-priority candidate might also have matched.

use crate::config::{ScoutConfig, SearchErrorPolicy};
use crate::extract::extract_urls;
use crate::search::{backend_from_config, SearchBackend};
use crate::types::{AppError, DocFileType, DocLookupResult, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Answer sentinel: the document fetched but contained nothing relevant.
pub const NO_DIRECT_ANSWER: &str = "No direct answer found in the documentation file.";

/// Answer sentinel: the document URL was found but could not be fetched.
pub const FETCH_FAILED: &str = "Could not fetch or process the documentation file.";

/// Lookup engine for documentation manifest files.
///
/// Cheap to share behind an [`Arc`]; each call is independent.
pub struct DocFinder {
    backend: Arc<dyn SearchBackend>,
    client: reqwest::Client,
    error_policy: SearchErrorPolicy,
}

impl DocFinder {
    /// Create a finder with an explicit backend and search failure policy.
    pub fn new(
        backend: Arc<dyn SearchBackend>,
        user_agent: &str,
        error_policy: SearchErrorPolicy,
    ) -> Self {
        Self {
            backend,
            client: crate::search::http_client(user_agent),
            error_policy,
        }
    }

    /// Create a finder from configuration.
    pub fn from_config(config: &ScoutConfig) -> Self {
        Self::new(
            backend_from_config(config),
            &config.http.user_agent,
            config.search.error_policy,
        )
    }

    /// Find a documentation manifest for `library` and derive an answer.
    ///
    /// Candidates are tried most-preferred first; the first search page with
    /// at least one matching URL short-circuits the rest. The subsequent
    /// document fetch never fails the call: fetch errors degrade to the
    /// [`FETCH_FAILED`] sentinel with `found` still true. Search-request
    /// errors are fatal or skip the candidate per [`SearchErrorPolicy`].
    pub async fn lookup(
        &self,
        library: &str,
        question: Option<&str>,
    ) -> Result<DocLookupResult> {
        for file_type in DocFileType::CANDIDATES {
            let query = format!("{} {}", library, file_type.as_str());
            let page = match self.backend.search(&query).await {
                Ok(page) => page,
                Err(e) => match self.error_policy {
                    SearchErrorPolicy::Fatal => return Err(e),
                    SearchErrorPolicy::Skip => {
                        warn!(%file_type, error = %e, "search failed, skipping candidate");
                        continue;
                    }
                },
            };

            let urls = extract_urls(&page, file_type.as_str())?;
            debug!(%file_type, matches = urls.len(), "extracted candidate urls");
            let Some(url) = urls.into_iter().next() else {
                continue;
            };

            info!(%file_type, %url, "documentation file located");
            let answer = self.derive_answer(&url, question).await;

            return Ok(DocLookupResult {
                message: format!("Found {} for {}: {}", file_type, library, url),
                url: Some(url),
                found: true,
                file_type: Some(file_type),
                answer: Some(answer),
            });
        }

        info!(library, "no documentation file found for any candidate type");
        Ok(DocLookupResult::not_found(library))
    }

    /// Fetch the discovered document and answer from it. Errors degrade to
    /// sentinels rather than propagating.
    async fn derive_answer(&self, url: &str, question: Option<&str>) -> String {
        let text = match self.fetch_document(url).await {
            Ok(text) => text,
            Err(e) => {
                warn!(%url, error = %e, "document fetch failed");
                return FETCH_FAILED.to_string();
            }
        };

        match question {
            Some(question) => {
                let needle = question.to_lowercase();
                text.lines()
                    .find(|line| line.to_lowercase().contains(&needle))
                    .map(str::to_string)
                    .unwrap_or_else(|| NO_DIRECT_ANSWER.to_string())
            }
            None if text.is_empty() => NO_DIRECT_ANSWER.to_string(),
            None => text,
        }
    }

    async fn fetch_document(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("request to {} failed: {}", url, e)))?
            .error_for_status()
            .map_err(|e| AppError::Fetch(format!("{} returned an error: {}", url, e)))?;

        response
            .text()
            .await
            .map_err(|e| AppError::Fetch(format!("failed to read body from {}: {}", url, e)))
    }
}
