// ABOUTME: Built-in tools for the research workflow.
// ABOUTME: Note taking, note review, and report generation.

mod generate_report;
mod list_notes;
mod save_note;

pub use generate_report::GenerateReportTool;
pub use list_notes::ListNotesTool;
pub use save_note::SaveNoteTool;
