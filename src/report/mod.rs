// ABOUTME: Report module - synthesizes markdown research reports.
// ABOUTME: Sections, conclusion, and an optional appendix of saved notes.

mod synthesizer;

pub use synthesizer::{ReportRequest, ReportSynthesizer, render};
