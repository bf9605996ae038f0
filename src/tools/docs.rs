//! The `find-llms-txt` tool: documentation discovery at the tool-call
//! boundary.
//!
//! Thin adapter between the agent runtime's JSON argument convention and
//! [`DocFinder`]. All lookup behavior lives in [`crate::finder`].

use crate::config::ScoutConfig;
use crate::finder::DocFinder;
use crate::tools::registry::Tool;
use crate::types::{AppError, LookupRequest, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

/// Tool wrapper around [`DocFinder`].
pub struct FindLlmsTxtTool {
    finder: Arc<DocFinder>,
}

impl FindLlmsTxtTool {
    /// Wrap an existing finder.
    pub fn new(finder: Arc<DocFinder>) -> Self {
        Self { finder }
    }

    /// Build the tool with a finder wired from configuration.
    pub fn from_config(config: &ScoutConfig) -> Self {
        Self::new(Arc::new(DocFinder::from_config(config)))
    }
}

#[async_trait]
impl Tool for FindLlmsTxtTool {
    fn name(&self) -> &str {
        "find-llms-txt"
    }

    fn description(&self) -> &str {
        "Searches the internet for llms.txt, llms-full.txt, or openapi.yaml of a \
         given library, fetches its content, and answers a question about it"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "library": {
                    "type": "string",
                    "description": "Name of the library to search for"
                },
                "question": {
                    "type": "string",
                    "description": "Optional question to answer from the documentation file"
                }
            },
            "required": ["library"]
        })
    }

    fn output_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": ["string", "null"],
                    "description": "URL of the documentation file if found, otherwise null"
                },
                "found": {
                    "type": "boolean",
                    "description": "Whether a documentation file was found"
                },
                "fileType": {
                    "type": ["string", "null"],
                    "enum": ["llms-full.txt", "llms.txt", "openapi.yaml", null],
                    "description": "Type of file found"
                },
                "message": {
                    "type": "string",
                    "description": "A message describing the result"
                },
                "answer": {
                    "type": ["string", "null"],
                    "description": "Answer derived from the documentation file, or null if not found"
                }
            },
            "required": ["url", "found", "fileType", "message", "answer"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let request: LookupRequest = serde_json::from_value(args)
            .map_err(|e| AppError::InvalidInput(format!("bad arguments: {}", e)))?;
        if request.library.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "'library' must not be empty".to_string(),
            ));
        }

        let result = self
            .finder
            .lookup(&request.library, request.question.as_deref())
            .await?;
        serde_json::to_value(result)
            .map_err(|e| AppError::Internal(format!("failed to serialize result: {}", e)))
    }
}
