// ABOUTME: GenerateReportTool - compiles sections, a conclusion, and saved notes
// ABOUTME: into a markdown report on disk. Returns the report path.

use async_trait::async_trait;

use crate::report::{ReportRequest, ReportSynthesizer};
use crate::tool::{Tool, ToolResult};

/// Tool for writing the final research report.
pub struct GenerateReportTool {
    synthesizer: ReportSynthesizer,
}

impl GenerateReportTool {
    pub fn new(synthesizer: ReportSynthesizer) -> Self {
        Self { synthesizer }
    }
}

#[async_trait]
impl Tool for GenerateReportTool {
    fn name(&self) -> &str {
        "generate_report"
    }

    fn description(&self) -> &str {
        "Generate a markdown research report from findings. Use this at the end of a research \
         session to compile all findings into a formatted, shareable report."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "The report title"
                },
                "sections": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "List of section contents (each becomes an H2 section)"
                },
                "conclusion": {
                    "type": "string",
                    "description": "The concluding summary"
                },
                "include_notes": {
                    "type": "boolean",
                    "description": "Whether to append saved notes at the end",
                    "default": true
                }
            },
            "required": ["title", "sections", "conclusion"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let request: ReportRequest = serde_json::from_value(params)?;
        let path = self.synthesizer.generate(&request)?;
        Ok(ToolResult::text(format!("Report generated: {}", path.display()))
            .with_metadata("path", path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::NoteStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_generate_report_success() {
        let dir = TempDir::new().unwrap();
        let synth = ReportSynthesizer::new(
            dir.path().join("reports"),
            NoteStore::new(dir.path().join("notes")),
        );
        let tool = GenerateReportTool::new(synth);

        let result = tool
            .execute(serde_json::json!({
                "title": "Findings",
                "sections": ["One", "Two"],
                "conclusion": "Done"
            }))
            .await
            .unwrap();

        assert!(result.content.starts_with("Report generated: "));
        let path = result.metadata["path"].as_str().unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("## Section 2\n\nTwo"));
    }

    #[tokio::test]
    async fn test_generate_report_bad_params() {
        let dir = TempDir::new().unwrap();
        let synth = ReportSynthesizer::new(dir.path(), NoteStore::new(dir.path()));
        let tool = GenerateReportTool::new(synth);

        let result = tool.execute(serde_json::json!({ "title": "x" })).await;
        assert!(result.is_err());
    }
}
