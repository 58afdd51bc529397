// ABOUTME: SaveNoteTool - records a research finding in the note store.
// ABOUTME: Returns the id of the saved note.

use async_trait::async_trait;
use serde::Deserialize;

use crate::notes::NoteStore;
use crate::tool::{Tool, ToolResult};

/// Tool for saving research notes.
pub struct SaveNoteTool {
    store: NoteStore,
}

impl SaveNoteTool {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for SaveNoteTool {
    fn name(&self) -> &str {
        "save_note"
    }

    fn description(&self) -> &str {
        "Save a research note to persistent storage. Use this to record important findings, \
         summaries, or insights that should be preserved for the final report."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "The topic or title for this note"
                },
                "content": {
                    "type": "string",
                    "description": "Note content (can be multiple paragraphs)"
                },
                "tags": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Optional list of tags for categorization"
                }
            },
            "required": ["topic", "content"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            topic: String,
            content: String,
            #[serde(default)]
            tags: Vec<String>,
        }
        let params: Params = serde_json::from_value(params)?;

        let id = self.store.save(&params.topic, &params.content, params.tags)?;
        Ok(ToolResult::text(format!("Note saved with ID: {}", id)).with_metadata("note_id", &id))
    }
}
