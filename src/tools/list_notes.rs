// ABOUTME: ListNotesTool - lists saved notes with previews, optionally by tag.
// ABOUTME: Reports an explicit "no notes" message instead of an empty string.

use async_trait::async_trait;
use serde::Deserialize;

use crate::notes::{NoteStore, render_listing};
use crate::tool::{Tool, ToolResult};

/// Tool for reviewing collected notes.
pub struct ListNotesTool {
    store: NoteStore,
}

impl ListNotesTool {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ListNotesTool {
    fn name(&self) -> &str {
        "list_notes"
    }

    fn description(&self) -> &str {
        "List all saved research notes, optionally filtering by tag. Use this to review \
         what notes have been collected before generating a report."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "tag_filter": {
                    "type": "string",
                    "description": "Optional tag to filter notes by"
                }
            }
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            #[serde(default)]
            tag_filter: Option<String>,
        }
        let params: Params = serde_json::from_value(params)?;

        let tag = params.tag_filter.as_deref();
        let notes = self.store.list(tag)?;
        Ok(ToolResult::text(render_listing(&notes, tag.is_some())).with_metadata("count", notes.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_notes_empty() {
        let dir = TempDir::new().unwrap();
        let tool = ListNotesTool::new(NoteStore::new(dir.path().join("notes")));

        let result = tool.execute(serde_json::json!({})).await.unwrap();
        assert_eq!(result.content, "No notes found.");
    }

    #[tokio::test]
    async fn test_list_notes_with_filter() {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::new(dir.path());
        store.save("Tagged", "yes", vec!["x".into()]).unwrap();
        store.save("Untagged", "no", vec![]).unwrap();
        let tool = ListNotesTool::new(store);

        let result = tool
            .execute(serde_json::json!({ "tag_filter": "x" }))
            .await
            .unwrap();
        assert!(result.content.contains("Tagged"));
        assert!(!result.content.contains("Untagged"));
        assert_eq!(result.metadata["count"], 1);

        let result = tool
            .execute(serde_json::json!({ "tag_filter": "absent" }))
            .await
            .unwrap();
        assert!(!result.is_error);
        assert_eq!(result.content, "No matching notes found.");
    }
}
