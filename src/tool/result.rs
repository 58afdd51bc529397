// ABOUTME: Defines the ToolResult type - the raw outcome a tool body returns -
// ABOUTME: and the status vocabulary the executor reports per call.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// What a tool body hands back to the executor.
///
/// `is_error` lets a tool report a soft failure (bad query, empty upstream
/// answer) without returning `Err`; both end up as [`CallStatus::Error`].
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub content: String,
    pub is_error: bool,
    /// Structured side data, e.g. the id of a saved note.
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ToolResult {
    /// Create a successful text result.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
            metadata: HashMap::new(),
        }
    }

    /// Create an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: message.into(),
            is_error: true,
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry. Values that fail to serialize are skipped.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.metadata.insert(key.into(), v);
        }
        self
    }
}

/// Final status of one tool call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    Success,
    Error,
    Rejected,
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallStatus::Success => write!(f, "success"),
            CallStatus::Error => write!(f, "error"),
            CallStatus::Rejected => write!(f, "rejected"),
        }
    }
}
