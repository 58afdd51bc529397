// ABOUTME: Tests for the tool Registry - replacement by name, sorted listing,
// ABOUTME: and the definitions offered to the model.

use std::sync::Arc;

use super::*;

/// A tool whose name and reply are chosen per test.
struct StubTool {
    name: &'static str,
    reply: &'static str,
}

#[async_trait::async_trait]
impl Tool for StubTool {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "Replies with a fixed string"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": { "query": { "type": "string" } },
            "required": ["query"]
        })
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        Ok(ToolResult::text(self.reply))
    }
}

fn stub(name: &'static str, reply: &'static str) -> StubTool {
    StubTool { name, reply }
}

#[tokio::test]
async fn test_lookup_by_name() {
    let registry = Registry::new();
    registry.register(stub("tavily_search", "hits")).await;

    let tool = registry.get("tavily_search").await.expect("registered");
    let out = tool.execute(serde_json::json!({ "query": "q" })).await.unwrap();
    assert_eq!(out.content, "hits");
    assert!(registry.get("save_note").await.is_none());
}

#[tokio::test]
async fn test_same_name_replaces() {
    let registry = Registry::new();
    registry.register(stub("tavily_search", "old")).await;
    registry.register(stub("tavily_search", "new")).await;

    assert_eq!(registry.to_definitions().await.len(), 1);
    let tool = registry.get("tavily_search").await.unwrap();
    let out = tool.execute(serde_json::json!({})).await.unwrap();
    assert_eq!(out.content, "new");
}

#[tokio::test]
async fn test_definitions_sorted_by_name() {
    let registry = Registry::new();
    for name in ["save_note", "generate_report", "list_notes"] {
        registry.register(stub(name, "")).await;
    }

    let defs = registry.to_definitions().await;
    let names: Vec<_> = defs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["generate_report", "list_notes", "save_note"]);
    assert_eq!(defs[0].description, "Replies with a fixed string");
    assert_eq!(defs[0].input_schema["required"][0], "query");
}

#[tokio::test]
async fn test_shared_arc_and_clones() {
    let registry = Registry::new();
    let view = registry.clone();

    let tool: Arc<dyn Tool> = Arc::new(stub("shared", "x"));
    registry.register_arc(tool.clone()).await;

    assert_eq!(view.to_definitions().await.len(), 1);
    assert!(Arc::ptr_eq(&view.get("shared").await.unwrap(), &tool));
}
