use std::fmt::Write;

use crate::checker::{CheckReport, Finding, Metric};
use crate::error::Result;
use crate::rules::{Phase, RuleKind, Severity};

use super::{ColorMode, OutputFormatter, ansi};

/// Context printed above the findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub root: String,
    pub rules: String,
}

pub struct TextFormatter {
    use_colors: bool,
    header: Option<ReportHeader>,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            header: None,
        }
    }

    #[must_use]
    pub fn with_header(mut self, header: ReportHeader) -> Self {
        self.header = Some(header);
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }

    fn status_icon(finding: &Finding) -> &'static str {
        if finding.passed {
            if matches!(finding.rule.kind, RuleKind::LineCount) {
                "ℹ"
            } else {
                "✓"
            }
        } else {
            match finding.rule.severity {
                Severity::Error => "✗",
                Severity::Warning => "⚠",
            }
        }
    }

    fn color_for(finding: &Finding) -> &'static str {
        match (finding.passed, finding.rule.severity) {
            (true, _) if matches!(finding.rule.kind, RuleKind::LineCount) => ansi::CYAN,
            (true, _) => ansi::GREEN,
            (false, Severity::Error) => ansi::RED,
            (false, Severity::Warning) => ansi::YELLOW,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_finding(&self, finding: &Finding, output: &mut String) {
        let icon = self.colorize(Self::status_icon(finding), Self::color_for(finding));
        let rule = &finding.rule;
        let line = match &rule.kind {
            RuleKind::FileExists => format!("{:<30} {} ({})", rule.target, rule.label, finding.detail),
            RuleKind::ContentContains { .. } if rule.phase == Phase::Content => {
                format!("{}: {}", rule.target, rule.label)
            }
            RuleKind::ContentContains { .. } | RuleKind::FeaturePresent { .. } => {
                format!("{:<24} {}", rule.label, rule.target)
            }
            RuleKind::CommentDensity { .. } | RuleKind::LineCount => {
                format!("{}: {}", rule.label, finding.detail)
            }
        };
        let _ = writeln!(output, "  {icon} {line}");
        let missing_marker = !finding.passed
            && matches!(
                rule.kind,
                RuleKind::ContentContains { .. } | RuleKind::FeaturePresent { .. }
            );
        if missing_marker {
            let _ = writeln!(output, "      {}", finding.detail);
        }
    }

    fn format_phase(&self, report: &CheckReport, phase: Phase, output: &mut String) {
        let findings: Vec<_> = report
            .findings()
            .iter()
            .filter(|f| f.rule.phase == phase)
            .collect();
        if findings.is_empty() {
            return;
        }

        let _ = writeln!(output, "{}", self.colorize(phase.title(), ansi::BOLD));
        for finding in &findings {
            self.format_finding(finding, output);
        }

        let has_line_counts = findings
            .iter()
            .any(|f| matches!(f.metric, Some(Metric::Lines(_))));
        if phase == Phase::Quality && has_line_counts {
            let total = self.colorize("ℹ", ansi::CYAN);
            let _ = writeln!(output, "  {total} total: {} lines", report.total_lines());
        }
        output.push('\n');
    }

    fn format_issue_list(&self, title: &str, issues: &[&Finding], output: &mut String) {
        if issues.is_empty() {
            return;
        }
        let _ = writeln!(output, "{title} ({}):", issues.len());
        for finding in issues {
            let icon = self.colorize(Self::status_icon(finding), Self::color_for(finding));
            let _ = writeln!(
                output,
                "  {icon} {}: {} ({})",
                finding.rule.target, finding.rule.label, finding.detail
            );
        }
    }

    fn format_summary(&self, report: &CheckReport, output: &mut String) {
        let errors = report.error_count();
        let warnings = report.warning_count();

        let passed_str = self.colorize(&report.passed_count().to_string(), ansi::GREEN);
        let warnings_str = self.colorize(&warnings.to_string(), ansi::YELLOW);
        let errors_str = self.colorize(&errors.to_string(), ansi::RED);
        let _ = writeln!(
            output,
            "Summary: {} checks, {passed_str} passed, {warnings_str} warnings, {errors_str} errors",
            report.findings().len()
        );

        if errors == 0 && warnings == 0 {
            let _ = writeln!(output, "All checks passed.");
        } else {
            let error_list: Vec<_> = report.errors().collect();
            let warning_list: Vec<_> = report.warnings().collect();
            self.format_issue_list("Errors", &error_list, output);
            self.format_issue_list("Warnings", &warning_list, output);
        }

        let status = report.status();
        let color = if status.is_success() {
            ansi::GREEN
        } else {
            ansi::RED
        };
        let _ = writeln!(
            output,
            "Result: {}",
            self.colorize(&status.to_string(), color)
        );
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let mut output = String::new();

        if let Some(header) = &self.header {
            let _ = writeln!(output, "Project: {}", header.root);
            let _ = writeln!(output, "Rules:   {}", header.rules);
            output.push('\n');
        }

        for phase in Phase::ALL {
            self.format_phase(report, phase, &mut output);
        }

        self.format_summary(report, &mut output);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
