// ABOUTME: Structured research output the agent is asked to produce, and its
// ABOUTME: conversion into a report request.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OutputError;
use crate::report::ReportRequest;

pub use crate::error::MAX_SUMMARY_CHARS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// A source reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A single research finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub claim: String,
    pub evidence: String,
    pub confidence: Confidence,
    #[serde(default)]
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchOutput {
    pub topic: String,
    pub summary: String,
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub gaps: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl ResearchOutput {
    pub fn validate(&self) -> Result<(), OutputError> {
        let len = self.summary.chars().count();
        if len > MAX_SUMMARY_CHARS {
            return Err(OutputError::SummaryTooLong(len));
        }
        if self.findings.is_empty() {
            return Err(OutputError::NoFindings);
        }
        Ok(())
    }

    /// One section per finding, then gaps and recommendations if present.
    /// The summary becomes the conclusion.
    pub fn to_report_request(&self, include_notes: bool) -> ReportRequest {
        let mut sections: Vec<String> = self.findings.iter().map(render_finding).collect();

        if !self.gaps.is_empty() {
            sections.push(bullets("Knowledge gaps", &self.gaps));
        }
        if !self.recommendations.is_empty() {
            sections.push(bullets("Recommendations", &self.recommendations));
        }

        ReportRequest {
            title: self.topic.clone(),
            sections,
            conclusion: self.summary.clone(),
            include_notes,
        }
    }
}

fn render_finding(finding: &Finding) -> String {
    let mut out = format!(
        "**{}** (confidence: {})\n\n{}",
        finding.claim, finding.confidence, finding.evidence
    );
    if !finding.sources.is_empty() {
        out.push_str("\n\nSources:");
        for source in &finding.sources {
            match &source.url {
                Some(url) => out.push_str(&format!("\n- [{}]({})", source.title, url)),
                None => out.push_str(&format!("\n- {}", source.title)),
            }
        }
    }
    out
}

fn bullets(heading: &str, items: &[String]) -> String {
    let mut out = format!("**{}**\n", heading);
    for item in items {
        out.push_str(&format!("\n- {}", item));
    }
    out
}
