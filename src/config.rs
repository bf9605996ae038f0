//! TOML-based configuration for docscout.
//!
//! Loaded from `docscout.toml`. Every field has a default, and a missing
//! config file is not an error: the tool runs against DuckDuckGo with the
//! original fail-loudly search semantics unless told otherwise.

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Root configuration structure loaded from docscout.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Search-engine selection and failure policy.
    #[serde(default)]
    pub search: SearchConfig,

    /// HTTP client settings shared by search and document fetches.
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging settings for the binary.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ScoutConfig {
    /// Load configuration from a TOML file. A missing file yields the
    /// defaults; a present but unparseable file is a hard error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

// ============= Search Configuration =============

/// Which search engine the lookup scrapes for candidate URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchBackendKind {
    /// DuckDuckGo's HTML-only endpoint.
    DuckDuckGo,
    /// Google web search.
    Google,
}

/// What to do when the search-engine request itself fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchErrorPolicy {
    /// Propagate the error to the caller (the original behavior).
    Fatal,
    /// Treat the candidate as a miss and continue down the priority list.
    Skip,
}

/// Search-engine selection and failure policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Which engine to scrape.
    #[serde(default = "default_backend")]
    pub backend: SearchBackendKind,

    /// Override the engine base URL. Mainly for tests against a local mock.
    pub base_url: Option<String>,

    /// Whether a failed search request aborts the lookup or skips the candidate.
    #[serde(default = "default_error_policy")]
    pub error_policy: SearchErrorPolicy,
}

fn default_backend() -> SearchBackendKind {
    SearchBackendKind::DuckDuckGo
}

fn default_error_policy() -> SearchErrorPolicy {
    SearchErrorPolicy::Fatal
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            base_url: None,
            error_policy: default_error_policy(),
        }
    }
}

// ============= HTTP Configuration =============

/// HTTP client settings shared by search and document fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("docscout/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

// ============= Logging Configuration =============

/// Logging settings for the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter, overridable via `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
