// ABOUTME: The Note record and its text rendering for listings.
// ABOUTME: Notes are immutable once written.

use serde::{Deserialize, Serialize};

/// Maximum characters of content shown in a listing preview.
pub const PREVIEW_CHARS: usize = 100;

/// A saved research note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub topic: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO-8601 creation time.
    pub timestamp: String,
}

impl Note {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Content cut to [`PREVIEW_CHARS`] characters, with `...` if cut.
    pub fn preview(&self) -> String {
        match self.content.char_indices().nth(PREVIEW_CHARS) {
            Some((end, _)) => format!("{}...", &self.content[..end]),
            None => self.content.clone(),
        }
    }
}

/// Render notes as the text returned by the `list_notes` tool.
///
/// `filtered` selects the wording used when there is nothing to show.
pub fn render_listing(notes: &[Note], filtered: bool) -> String {
    if notes.is_empty() {
        return if filtered {
            "No matching notes found.".to_string()
        } else {
            "No notes found.".to_string()
        };
    }

    notes
        .iter()
        .map(|note| {
            let tags = if note.tags.is_empty() {
                "no tags".to_string()
            } else {
                note.tags.join(", ")
            };
            format!(
                "[{}] {}\n    Tags: {}\n    {}",
                note.id,
                note.topic,
                tags,
                note.preview()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
