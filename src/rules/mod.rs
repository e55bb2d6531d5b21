//! Declarative rule model.
//!
//! A [`Rule`] is one atomic check against one project file. Rules carry no
//! behavior; the [`checker`](crate::checker) module evaluates them.

mod set;

pub use set::RuleSet;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a failed rule blocks success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory: recorded but never fails the run.
    #[default]
    Warning,
    /// Blocking: any failed `Error` finding fails the run.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Report section a rule belongs to. Has no effect on evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Existence,
    Content,
    Quality,
    Dependencies,
    Features,
}

impl Phase {
    pub const ALL: [Self; 5] = [
        Self::Existence,
        Self::Content,
        Self::Quality,
        Self::Dependencies,
        Self::Features,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Existence => "Files",
            Self::Content => "Content",
            Self::Quality => "Code quality",
            Self::Dependencies => "Dependencies",
            Self::Features => "Features",
        }
    }
}

/// What a rule checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// The target file exists.
    FileExists,
    /// The target file contains `marker` as a literal, case-sensitive substring.
    ContentContains { marker: String },
    /// Same check as `ContentContains`, reported as a named feature.
    FeaturePresent { marker: String },
    /// Occurrences of `marker` per line must exceed `threshold`.
    CommentDensity { marker: String, threshold: f64 },
    /// Reports the line count of the target. Always passes.
    LineCount,
}

impl RuleKind {
    /// Returns `true` for quality metrics, which are advisory by definition.
    #[must_use]
    pub const fn is_metric(&self) -> bool {
        matches!(self, Self::CommentDensity { .. } | Self::LineCount)
    }

    /// Returns `true` for every kind that needs the file content.
    #[must_use]
    pub const fn reads_content(&self) -> bool {
        !matches!(self, Self::FileExists)
    }
}

/// One atomic, independently evaluable check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    #[serde(flatten)]
    pub kind: RuleKind,
    /// File identifier relative to the project root.
    pub target: String,
    /// Human-readable name.
    pub label: String,
    pub severity: Severity,
    pub phase: Phase,
}

impl Rule {
    /// Existence rule. Always `Error` severity.
    #[must_use]
    pub fn file_exists(target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::FileExists,
            target: target.into(),
            label: label.into(),
            severity: Severity::Error,
            phase: Phase::Existence,
        }
    }

    /// Content marker rule with `Warning` severity.
    #[must_use]
    pub fn content(
        target: impl Into<String>,
        marker: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            kind: RuleKind::ContentContains {
                marker: marker.into(),
            },
            target: target.into(),
            label: label.into(),
            severity: Severity::Warning,
            phase: Phase::Content,
        }
    }

    /// Dependency-declaration rule: a content rule in the dependencies section.
    #[must_use]
    pub fn dependency(
        target: impl Into<String>,
        marker: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self::content(target, marker, label).in_phase(Phase::Dependencies)
    }

    /// Feature rule with `Warning` severity.
    #[must_use]
    pub fn feature(
        label: impl Into<String>,
        target: impl Into<String>,
        marker: impl Into<String>,
    ) -> Self {
        Self {
            kind: RuleKind::FeaturePresent {
                marker: marker.into(),
            },
            target: target.into(),
            label: label.into(),
            severity: Severity::Warning,
            phase: Phase::Features,
        }
    }

    #[must_use]
    pub fn comment_density(
        target: impl Into<String>,
        marker: impl Into<String>,
        threshold: f64,
    ) -> Self {
        let target = target.into();
        Self {
            label: format!("{target} comment density"),
            kind: RuleKind::CommentDensity {
                marker: marker.into(),
                threshold,
            },
            target,
            severity: Severity::Warning,
            phase: Phase::Quality,
        }
    }

    #[must_use]
    pub fn line_count(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            label: format!("{target} line count"),
            kind: RuleKind::LineCount,
            target,
            severity: Severity::Warning,
            phase: Phase::Quality,
        }
    }

    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub const fn in_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// The literal substring this rule looks for, if any.
    #[must_use]
    pub fn marker(&self) -> Option<&str> {
        match &self.kind {
            RuleKind::ContentContains { marker }
            | RuleKind::FeaturePresent { marker }
            | RuleKind::CommentDensity { marker, .. } => Some(marker),
            RuleKind::FileExists | RuleKind::LineCount => None,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
