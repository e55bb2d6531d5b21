use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::{Rule, RuleSet, Severity};

/// Supported rule file version.
pub const CONFIG_VERSION: &str = "1";

/// Rule file contents, as written in `.marker-guard.toml`.
///
/// Sections map one-to-one onto rule phases; [`Config::to_rule_set`] turns
/// them into an ordered [`RuleSet`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Required files: `{file = label}`, in declaration order.
    #[serde(default)]
    pub files: IndexMap<String, String>,

    /// Content markers [[content]].
    #[serde(default)]
    pub content: Vec<ContentEntry>,

    /// Code quality metrics [quality].
    #[serde(default)]
    pub quality: QualityConfig,

    /// Dependency declarations [[dependencies]].
    #[serde(default)]
    pub dependencies: Vec<ContentEntry>,

    /// Feature markers [[features]].
    #[serde(default)]
    pub features: Vec<FeatureEntry>,
}

/// `{file, marker, label}` content rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentEntry {
    pub file: String,
    pub marker: String,
    pub label: String,
    #[serde(default)]
    pub severity: Severity,
}

/// `{label, file, marker}` feature rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureEntry {
    pub label: String,
    pub file: String,
    pub marker: String,
    #[serde(default)]
    pub severity: Severity,
}

/// Thresholds and targets for the quality metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualityConfig {
    /// Marker counted as a comment.
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,

    /// Minimum comment ratio (exclusive), 0.0-1.0.
    #[serde(default = "default_comment_threshold")]
    pub comment_threshold: f64,

    /// Files to measure comment density on.
    #[serde(default)]
    pub comment_density: Vec<String>,

    /// Files to report line counts for.
    #[serde(default)]
    pub line_count: Vec<String>,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            comment_marker: default_comment_marker(),
            comment_threshold: default_comment_threshold(),
            comment_density: Vec::new(),
            line_count: Vec::new(),
        }
    }
}

fn default_comment_marker() -> String {
    "//".to_string()
}

const fn default_comment_threshold() -> f64 {
    0.1
}

impl Config {
    /// Build the ordered rule set: files, content, quality, dependencies, features.
    ///
    /// # Errors
    /// Returns a configuration error if the rules are malformed or a rule
    /// targets a file not listed under `[files]`.
    pub fn to_rule_set(&self) -> Result<RuleSet> {
        let quality = &self.quality;
        let rules = self
            .files
            .iter()
            .map(|(file, label)| Rule::file_exists(file, label))
            .chain(
                self.content
                    .iter()
                    .map(|c| Rule::content(&c.file, &c.marker, &c.label).with_severity(c.severity)),
            )
            .chain(quality.comment_density.iter().map(|file| {
                Rule::comment_density(file, &quality.comment_marker, quality.comment_threshold)
            }))
            .chain(quality.line_count.iter().map(Rule::line_count))
            .chain(self.dependencies.iter().map(|d| {
                Rule::dependency(&d.file, &d.marker, &d.label).with_severity(d.severity)
            }))
            .chain(
                self.features
                    .iter()
                    .map(|f| Rule::feature(&f.label, &f.file, &f.marker).with_severity(f.severity)),
            )
            .collect();
        RuleSet::new(rules)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
