// ABOUTME: ReportSynthesizer - renders a ReportRequest plus the current notes
// ABOUTME: into markdown and writes it under a timestamp-derived filename.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::artifact::write_new;
use crate::error::PersistenceError;
use crate::notes::{Note, NoteStore};
use crate::stamp::StampClock;

/// Input of a report generation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportRequest {
    pub title: String,
    /// Section bodies, rendered as `## Section <n>` in order.
    pub sections: Vec<String>,
    pub conclusion: String,
    #[serde(default = "default_include_notes")]
    pub include_notes: bool,
}

fn default_include_notes() -> bool {
    true
}

/// Render a report document.
///
/// Pure: equal inputs render identical text.
pub fn render(request: &ReportRequest, notes: &[Note], generated_at: NaiveDateTime) -> String {
    let mut out = String::new();
    let _ = write!(out, "# {}\n\n", request.title);
    let _ = write!(out, "Generated: {}\n\n", generated_at.format("%Y-%m-%d %H:%M"));
    out.push_str("---\n\n");

    for (i, section) in request.sections.iter().enumerate() {
        let _ = write!(out, "## Section {}\n\n{}\n\n", i + 1, section);
    }

    let _ = write!(out, "## Conclusion\n\n{}\n\n", request.conclusion);

    if request.include_notes && !notes.is_empty() {
        out.push_str("---\n\n## Appendix: Research Notes\n\n");
        for note in notes {
            let _ = write!(out, "### {}\n\n", note.topic);
            let _ = write!(out, "*{}*\n\n", note.timestamp);
            let _ = write!(out, "{}\n\n", note.content);
        }
    }

    out
}

/// Writes reports into one directory, reading notes from a [`NoteStore`].
#[derive(Debug, Clone)]
pub struct ReportSynthesizer {
    dir: PathBuf,
    notes: NoteStore,
    clock: Arc<StampClock>,
}

impl ReportSynthesizer {
    pub fn new(dir: impl Into<PathBuf>, notes: NoteStore) -> Self {
        Self {
            dir: dir.into(),
            notes,
            clock: Arc::new(StampClock::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Generate a report and return the path it was written to.
    ///
    /// Notes are read once, at call time. If they cannot be read the report
    /// is not written.
    pub fn generate(&self, request: &ReportRequest) -> Result<PathBuf, PersistenceError> {
        let notes = if request.include_notes {
            self.notes.list(None)?
        } else {
            Vec::new()
        };

        fs::create_dir_all(&self.dir).map_err(|e| PersistenceError::io(&self.dir, e))?;

        loop {
            let (stamp_id, stamp) = self.clock.next_id();
            let path = self.dir.join(format!("report_{}.md", stamp_id));
            let content = render(request, &notes, stamp);

            if !write_new(&self.dir, &path, content.as_bytes())? {
                continue;
            }

            tracing::info!(
                path = %path.display(),
                sections = request.sections.len(),
                notes = notes.len(),
                "Report generated"
            );
            return Ok(path);
        }
    }
}
