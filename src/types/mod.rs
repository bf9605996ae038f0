//! Core types (requests, results, tool schemas, errors).

use serde::{Deserialize, Serialize};

// ============= Lookup Request/Result Types =============

/// Input to a documentation lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    /// Name of the library to search documentation for.
    pub library: String,
    /// Optional question to answer from the discovered document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

/// Documentation manifest file types, in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocFileType {
    /// `llms-full.txt` - full documentation dump.
    #[serde(rename = "llms-full.txt")]
    LlmsFullTxt,
    /// `llms.txt` - curated documentation index.
    #[serde(rename = "llms.txt")]
    LlmsTxt,
    /// `openapi.yaml` - OpenAPI service description.
    #[serde(rename = "openapi.yaml")]
    OpenapiYaml,
}

impl DocFileType {
    /// All candidate file types, most preferred first. Lookup tries them in
    /// this order and stops at the first one that yields a URL match.
    pub const CANDIDATES: [DocFileType; 3] = [
        DocFileType::LlmsFullTxt,
        DocFileType::LlmsTxt,
        DocFileType::OpenapiYaml,
    ];

    /// The filename suffix this candidate matches on.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocFileType::LlmsFullTxt => "llms-full.txt",
            DocFileType::LlmsTxt => "llms.txt",
            DocFileType::OpenapiYaml => "openapi.yaml",
        }
    }
}

impl std::fmt::Display for DocFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a documentation lookup.
///
/// Invariant: `found` is true iff both `url` and `file_type` are present, and
/// `answer` is present only when `found` is true. Note that `answer` may hold
/// one of the fixed sentinel strings (see [`crate::finder`]) rather than real
/// document content when the document fetch failed or matched nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocLookupResult {
    /// URL of the documentation file, if one was found.
    pub url: Option<String>,
    /// Whether a documentation file was found.
    pub found: bool,
    /// Which candidate file type matched. Serialized as `fileType`, the key
    /// agent runtimes consuming this tool's output contract expect.
    #[serde(rename = "fileType")]
    pub file_type: Option<DocFileType>,
    /// Human-readable description of the result.
    pub message: String,
    /// Derived answer: document content, a matching line, or a sentinel.
    pub answer: Option<String>,
}

impl DocLookupResult {
    /// Negative result for a library no candidate matched.
    pub fn not_found(library: &str) -> Self {
        Self {
            url: None,
            found: false,
            file_type: None,
            message: format!(
                "Could not find llms.txt, llms-full.txt, or openapi.yaml for {}",
                library
            ),
            answer: None,
        }
    }
}

// ============= Tool Types =============

/// Declarative description of a callable tool: name, human-readable
/// description, and JSON Schemas for its input and output shapes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToolDefinition {
    /// Tool id registered with the agent runtime.
    pub name: String,
    /// Human-readable description shown to the model.
    pub description: String,
    /// JSON Schema for the input arguments.
    pub parameters: serde_json::Value,
    /// JSON Schema for the returned value.
    pub output: serde_json::Value,
}

// ============= Error Types =============

/// Crate-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The search-engine request failed (network error or non-success status).
    #[error("Search error: {0}")]
    Search(String),

    /// The document fetch failed. Normally downgraded to a sentinel answer.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Tool arguments did not match the declared input shape.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A named tool or backend does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// Anything else.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;
