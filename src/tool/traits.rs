// ABOUTME: Defines the Tool trait - a named capability the executor can call
// ABOUTME: with a JSON payload on behalf of the research agent.

use async_trait::async_trait;

use super::ToolResult;

/// A capability exposed to the model, e.g. `save_note` or a web search.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name; requests address the tool by it.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON Schema of the input object.
    fn schema(&self) -> serde_json::Value;

    /// Run the tool body.
    ///
    /// An `Err` is a tool-level failure: the executor records it as an
    /// error result and keeps running sibling calls.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error>;
}
