use serde::Serialize;

use crate::checker::{CheckReport, Finding, RunStatus};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    status: RunStatus,
    summary: Summary,
    findings: &'a [Finding],
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    passed: usize,
    warnings: usize,
    errors: usize,
    total_lines: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let output = JsonOutput {
            status: report.status(),
            summary: Summary {
                total: report.findings().len(),
                passed: report.passed_count(),
                warnings: report.warning_count(),
                errors: report.error_count(),
                total_lines: report.total_lines(),
            },
            findings: report.findings(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
