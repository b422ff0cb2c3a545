#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line:
//! 1. One violation record per reported error, in report order
//! 2. One summary record

use crate::output::CheckReport;
use serde::Serialize;

/// JSONL output formatter
///
/// Formats check reports as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the report as JSONL
    pub fn format(&self, report: &CheckReport) -> String {
        let mut output = String::new();

        for violation in &report.violations {
            let record = ViolationRecord {
                record_type: "violation",
                file: &violation.file,
                line: violation.error.line,
                start: violation.error.start,
                end: violation.error.end,
                rule: violation.error.rule_id.as_str(),
                message: &violation.error.message,
                snippet: &violation.snippet,
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let summary = SummaryRecord {
            record_type: "summary",
            passed: report.passed(),
            files: report.files_checked,
            sentences: report.sentences_checked,
            rules: report.rules_active,
            violations: report.violations.len(),
        };
        if let Ok(json) = serde_json::to_string(&summary) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, report: &CheckReport) {
        print!("{}", self.format(report));
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Violation record for JSONL output
#[derive(Debug, Serialize)]
struct ViolationRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: &'a str,
    line: usize,
    start: usize,
    end: usize,
    rule: &'a str,
    message: &'a str,
    snippet: &'a str,
}

/// Summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    files: usize,
    sentences: usize,
    rules: usize,
    violations: usize,
}
