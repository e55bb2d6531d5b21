use tracing::{debug, info};

use crate::accessor::ProjectFiles;
use crate::checker::{CheckReport, evaluate};
use crate::cli::{CheckArgs, Cli};
use crate::config::validate_config_semantics;
use crate::error::MarkerGuardError;
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, ReportHeader,
    TextFormatter,
};
use crate::{EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::{load_rules_config, resolve_root, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs a check and returns the exit code derived from the report status.
///
/// # Errors
/// Returns an error if the rules cannot be loaded, the run aborts on an
/// unreadable file, or the report cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Resolve project root
    let root = resolve_root(&args.root)?;

    // 2. Load rules
    let loaded = load_rules_config(
        &root,
        args.config.as_deref(),
        args.preset.as_deref(),
        args.no_config,
    )?;
    validate_config_semantics(&loaded.config)?;
    let rules = loaded.config.to_rule_set()?;
    info!(root = %root.display(), rules = rules.len(), origin = %loaded.origin, "checking project");

    // 3. Evaluate
    let report = evaluate(&rules, ProjectFiles::new(&root))?;
    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "check finished"
    );

    // 4. Format and write the report
    let header = ReportHeader {
        root: root.display().to_string(),
        rules: loaded.origin.to_string(),
    };
    let output = format_report(args.format, &report, cli.color.into(), header)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 5. Exit code follows status only; warnings never fail the run
    Ok(if report.status().is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_CHECK_FAILED
    })
}

fn format_report(
    format: OutputFormat,
    report: &CheckReport,
    color_mode: ColorMode,
    header: ReportHeader,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode)
            .with_header(header)
            .format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

/// Print an error on stderr. Fatal aborts get their own segment.
fn report_error(err: &MarkerGuardError, color_mode: ColorMode) {
    let output = ErrorOutput::new(color_mode);
    if err.is_fatal() {
        output.print_error_with_detail(
            "Fatal",
            &err.to_string(),
            Some("check aborted before producing a report"),
            fatal_suggestion(err),
        );
    } else {
        output.print_error_with_detail(err.error_type(), &err.to_string(), None, None);
    }
}

const fn fatal_suggestion(err: &MarkerGuardError) -> Option<&'static str> {
    match err {
        MarkerGuardError::Decode { .. } => Some("files checked for content must be UTF-8 text"),
        _ => None,
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
