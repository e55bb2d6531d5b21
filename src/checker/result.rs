use std::fmt;

use serde::Serialize;

use crate::rules::{Rule, Severity};

/// A measured value attached to a finding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Bytes(u64),
    Lines(usize),
    Ratio(f64),
}

/// Outcome of evaluating one rule.
///
/// Holds its own copy of the rule, so a report stays valid after the rule set
/// it came from is dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub rule: Rule,
    pub passed: bool,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<Metric>,
}

impl Finding {
    #[must_use]
    pub fn new(rule: &Rule, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            rule: rule.clone(),
            passed,
            detail: detail.into(),
            metric: None,
        }
    }

    #[must_use]
    pub const fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = Some(metric);
        self
    }

    /// Failed with `Error` severity: blocks success.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !self.passed && self.rule.severity == Severity::Error
    }

    /// Failed with `Warning` severity: advisory only.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        !self.passed && self.rule.severity == Severity::Warning
    }
}

/// Overall outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Failure,
}

impl RunStatus {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "PASSED"),
            Self::Failure => write!(f, "FAILED"),
        }
    }
}

/// All findings of one run, in rule set order.
///
/// Counts and status are derived from the findings on every call and are
/// never stored separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    findings: Vec<Finding>,
}

impl CheckReport {
    #[must_use]
    pub const fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_warning())
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.findings.iter().filter(|f| f.passed).count()
    }

    /// `Success` iff no finding failed with `Error` severity.
    #[must_use]
    pub fn status(&self) -> RunStatus {
        if self.error_count() == 0 {
            RunStatus::Success
        } else {
            RunStatus::Failure
        }
    }

    /// Sum of all line-count metrics.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.findings
            .iter()
            .filter_map(|f| match f.metric {
                Some(Metric::Lines(lines)) => Some(lines),
                _ => None,
            })
            .sum()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
