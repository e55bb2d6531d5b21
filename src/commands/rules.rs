use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, RulesAction, RulesArgs};
use crate::config::{ConfigLoader, ConfigOrigin, FileConfigLoader, validate_config_semantics};
use crate::output::{OutputFormat, print_error_full};
use crate::rules::{Phase, RuleKind, RuleSet};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, MarkerGuardError, Result};

use super::{load_rules_config, resolve_root};

#[must_use]
pub fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        RulesAction::Validate { config } => run_rules_validate(config, cli),
        RulesAction::Show {
            root,
            config,
            preset,
            format,
        } => run_rules_show(root, config.as_deref(), preset.as_deref(), *format, cli),
    };
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error_full(e.error_type(), &e.to_string(), None, None);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a rule file: syntax, version and rule set structure.
///
/// # Errors
/// Returns an error if the file is missing, is not valid TOML, or describes
/// an invalid rule set.
pub(crate) fn run_rules_validate(config_path: &Path, cli: &Cli) -> Result<()> {
    if !config_path.exists() {
        return Err(MarkerGuardError::Config(format!(
            "Rule file not found: {}",
            config_path.display()
        )));
    }

    let loaded = FileConfigLoader::new().load_from_path(config_path)?;
    validate_config_semantics(&loaded.config)?;

    if !cli.quiet {
        println!("Rule file is valid: {}", config_path.display());
    }
    Ok(())
}

fn run_rules_show(
    root: &Path,
    config: Option<&Path>,
    preset: Option<&str>,
    format: OutputFormat,
    cli: &Cli,
) -> Result<()> {
    let root = resolve_root(root)?;
    let loaded = load_rules_config(&root, config, preset, false)?;
    validate_config_semantics(&loaded.config)?;
    let rules = loaded.config.to_rule_set()?;

    let output = match format {
        OutputFormat::Text => format_rules_text(&rules, &loaded.origin),
        OutputFormat::Json => serde_json::to_string_pretty(rules.rules())? + "\n",
    };
    if !cli.quiet {
        print!("{output}");
    }
    Ok(())
}

/// Render the effective rule set grouped by phase.
#[must_use]
pub fn format_rules_text(rules: &RuleSet, origin: &ConfigOrigin) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Rules from {origin} ({} rules)", rules.len());

    for phase in Phase::ALL {
        let mut in_phase = rules.in_phase(phase).peekable();
        if in_phase.peek().is_none() {
            continue;
        }
        let _ = writeln!(output, "\n{}", phase.title());
        for rule in in_phase {
            let _ = write!(
                output,
                "  {:<8} {:<30} {}",
                rule.severity.to_string(),
                rule.target,
                rule.label
            );
            match &rule.kind {
                RuleKind::CommentDensity { marker, threshold } => {
                    let _ = write!(output, " [{marker:?} > {threshold}]");
                }
                _ => {
                    if let Some(marker) = rule.marker() {
                        let _ = write!(output, " [{marker:?}]");
                    }
                }
            }
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
