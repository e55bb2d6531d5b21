use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, trace};

use crate::accessor::FileAccessor;
use crate::error::Result;
use crate::rules::{Rule, RuleKind, RuleSet};

use super::metrics::{comment_ratio, line_count};
use super::result::{CheckReport, Finding, Metric};

/// Single-run rule evaluator.
///
/// Existence lookups and file contents are cached for the lifetime of the
/// evaluator, so each file is read at most once per run. An evaluator is
/// consumed by [`Evaluator::run`] and cannot be reused.
pub struct Evaluator<A: FileAccessor> {
    accessor: A,
    existence: HashMap<String, bool>,
    contents: HashMap<String, String>,
}

impl<A: FileAccessor> Evaluator<A> {
    #[must_use]
    pub fn new(accessor: A) -> Self {
        Self {
            accessor,
            existence: HashMap::new(),
            contents: HashMap::new(),
        }
    }

    /// Evaluate every rule in order and collect the findings.
    ///
    /// Rules targeting a missing file produce no finding, except the file's
    /// own existence rule.
    ///
    /// # Errors
    /// Returns a fatal error if an existing file cannot be read as text. No
    /// report is produced in that case.
    pub fn run(mut self, rules: &RuleSet) -> Result<CheckReport> {
        let mut findings = Vec::with_capacity(rules.len());
        for rule in rules {
            if let Some(finding) = self.evaluate_rule(rule)? {
                trace!(label = %rule.label, passed = finding.passed, "rule evaluated");
                findings.push(finding);
            }
        }
        debug!(
            rules = rules.len(),
            findings = findings.len(),
            files_read = self.contents.len(),
            "evaluation finished"
        );
        Ok(CheckReport::new(findings))
    }

    fn evaluate_rule(&mut self, rule: &Rule) -> Result<Option<Finding>> {
        if !self.exists(&rule.target) {
            if matches!(rule.kind, RuleKind::FileExists) {
                return Ok(Some(Finding::new(rule, false, "missing")));
            }
            debug!(label = %rule.label, target = %rule.target, "skipped, target missing");
            return Ok(None);
        }

        let finding = match &rule.kind {
            RuleKind::FileExists => {
                let size = self.accessor.size(&rule.target)?;
                Finding::new(rule, true, format!("{size} bytes")).with_metric(Metric::Bytes(size))
            }
            RuleKind::ContentContains { marker } | RuleKind::FeaturePresent { marker } => {
                let found = self.content(&rule.target)?.contains(marker.as_str());
                let detail = if found {
                    "found".to_string()
                } else {
                    format!("marker not found: {marker}")
                };
                Finding::new(rule, found, detail)
            }
            RuleKind::CommentDensity { marker, threshold } => {
                let ratio = comment_ratio(self.content(&rule.target)?, marker);
                let detail = format!("{:.1}% (threshold {:.1}%)", ratio * 100.0, threshold * 100.0);
                Finding::new(rule, ratio > *threshold, detail).with_metric(Metric::Ratio(ratio))
            }
            RuleKind::LineCount => {
                let lines = line_count(self.content(&rule.target)?);
                Finding::new(rule, true, format!("{lines} lines")).with_metric(Metric::Lines(lines))
            }
        };
        Ok(Some(finding))
    }

    fn exists(&mut self, file: &str) -> bool {
        match self.existence.entry(file.to_string()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => *entry.insert(self.accessor.exists(file)),
        }
    }

    fn content(&mut self, file: &str) -> Result<&str> {
        let text = match self.contents.entry(file.to_string()) {
            Entry::Occupied(entry) => {
                trace!(file, "content cache hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                debug!(file, "reading content");
                entry.insert(self.accessor.read_text(file)?)
            }
        };
        Ok(text.as_str())
    }
}

/// Evaluate `rules` against `accessor` with a fresh [`Evaluator`].
///
/// # Errors
/// Returns a fatal error if an existing file cannot be read as text.
pub fn evaluate<A: FileAccessor>(rules: &RuleSet, accessor: A) -> Result<CheckReport> {
    Evaluator::new(accessor).run(rules)
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
