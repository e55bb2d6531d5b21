use std::collections::HashMap;

use crate::error::{MarkerGuardError, Result};

use super::{Phase, Rule, RuleKind, Severity};

/// Ordered, immutable collection of rules for one run.
///
/// Construction enforces that every content-reading rule targets a file
/// declared by exactly one `FileExists` rule, so content checks always have
/// an existence check to cascade from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set from an ordered rule list.
    ///
    /// # Errors
    /// Returns a configuration error if a rule is malformed, a file has more
    /// than one existence rule, or a content rule has no existence rule.
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        let mut existence: HashMap<&str, usize> = HashMap::new();
        for (i, rule) in rules.iter().enumerate() {
            validate_rule(i, rule)?;
            if matches!(rule.kind, RuleKind::FileExists) {
                *existence.entry(rule.target.as_str()).or_default() += 1;
            }
        }

        if let Some((target, _)) = existence.iter().find(|(_, count)| **count > 1) {
            return Err(MarkerGuardError::Config(format!(
                "file '{target}' is declared by more than one existence rule"
            )));
        }

        for rule in rules.iter().filter(|r| r.kind.reads_content()) {
            if !existence.contains_key(rule.target.as_str()) {
                return Err(MarkerGuardError::Config(format!(
                    "rule '{}' targets '{}', which has no existence rule",
                    rule.label, rule.target
                )));
            }
        }

        Ok(Self { rules })
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules of one phase, in declaration order.
    pub fn in_phase(&self, phase: Phase) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.phase == phase)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

fn validate_rule(index: usize, rule: &Rule) -> Result<()> {
    let err = |msg: String| Err(MarkerGuardError::Config(format!("rules[{index}]: {msg}")));

    if rule.target.trim().is_empty() {
        return err("target file cannot be empty".to_string());
    }
    if rule.label.trim().is_empty() {
        return err(format!("label for '{}' cannot be empty", rule.target));
    }
    if rule.marker().is_some_and(str::is_empty) {
        return err(format!("marker for '{}' cannot be empty", rule.label));
    }

    match &rule.kind {
        RuleKind::FileExists if rule.severity != Severity::Error => {
            err(format!("existence rule '{}' must have error severity", rule.label))
        }
        kind if kind.is_metric() && rule.severity != Severity::Warning => {
            err(format!("quality rule '{}' must have warning severity", rule.label))
        }
        RuleKind::CommentDensity { threshold, .. } if !(0.0..=1.0).contains(threshold) => err(
            format!("comment threshold must be between 0.0 and 1.0, got {threshold}"),
        ),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
