//! Tool-call boundary: schema-declared capabilities for agent runtimes.
//!
//! Agents interact with this crate exclusively through [`registry::Tool`]
//! implementations managed by a [`registry::ToolRegistry`]. Each tool
//! registers an id, a description, an input shape, and an output shape, and
//! is invoked with JSON arguments.
//!
//! The one built-in tool is [`docs::FindLlmsTxtTool`] (`find-llms-txt`).

/// Documentation discovery tool.
pub mod docs;
/// Tool trait and registry.
pub mod registry;

pub use docs::FindLlmsTxtTool;
pub use registry::{Tool, ToolRegistry};
