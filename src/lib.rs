//! # docscout
//!
//! Documentation discovery toolkit for agentic assistants: finds a library's
//! `llms-full.txt`, `llms.txt`, or `openapi.yaml` manifest by scraping a
//! search engine, fetches it, and answers questions from its content.
//!
//! ## Overview
//!
//! docscout can be used in two ways:
//!
//! 1. **As a standalone CLI** - Run the `docscout` binary
//! 2. **As a library** - Expose the `find-llms-txt` tool to your own agent
//!    runtime via [`ToolRegistry`]
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use docscout::{DocFinder, ScoutConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let finder = DocFinder::from_config(&ScoutConfig::default());
//!     let result = finder.lookup("react", Some("hooks")).await?;
//!     if result.found {
//!         println!("{}", result.message);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### At the tool-call boundary
//!
//! ```rust,ignore
//! use docscout::{ScoutConfig, ToolRegistry};
//! use serde_json::json;
//!
//! let registry = ToolRegistry::with_default_tools(&ScoutConfig::default());
//! let definitions = registry.definitions(); // schemas for the runtime
//! let result = registry
//!     .execute("find-llms-txt", json!({"library": "react"}))
//!     .await?;
//! ```
//!
//! ## Modules
//!
//! - [`finder`] - The documentation lookup engine
//! - [`search`] - Pluggable search-engine backends
//! - [`extract`] - URL extraction from raw result pages
//! - [`tools`] - Tool trait, registry, and the `find-llms-txt` tool
//! - [`config`] - TOML configuration
//! - [`types`] - Common types and error handling

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Command-line interface for the docscout binary.
pub mod cli;
/// TOML configuration.
pub mod config;
/// URL extraction from raw search-result markup.
pub mod extract;
/// Documentation lookup engine.
pub mod finder;
/// Search-engine backends.
pub mod search;
/// Tool definitions and registry.
pub mod tools;
/// Core types (requests, results, errors).
pub mod types;

// Re-export commonly used types
pub use config::{ScoutConfig, SearchBackendKind, SearchErrorPolicy};
pub use finder::{DocFinder, FETCH_FAILED, NO_DIRECT_ANSWER};
pub use search::{DuckDuckGoBackend, GoogleBackend, SearchBackend};
pub use tools::{FindLlmsTxtTool, Tool, ToolRegistry};
pub use types::{AppError, DocFileType, DocLookupResult, LookupRequest, Result, ToolDefinition};
