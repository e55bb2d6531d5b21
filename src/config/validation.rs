//! Configuration semantic validation.
//!
//! Range checks on thresholds plus the structural checks performed when the
//! rule set is built.

use crate::config::Config;
use crate::{MarkerGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if `comment_threshold` is out of range, a section names
/// an empty file, or the rules fail [`RuleSet`](crate::rules::RuleSet) validation.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_quality_section(config)?;
    validate_file_names(config)?;
    config.to_rule_set().map(|_| ())
}

fn validate_quality_section(config: &Config) -> Result<()> {
    let quality = &config.quality;
    if !(0.0..=1.0).contains(&quality.comment_threshold) {
        return Err(MarkerGuardError::Config(format!(
            "quality.comment_threshold must be between 0.0 and 1.0, got {}",
            quality.comment_threshold
        )));
    }
    if !quality.comment_density.is_empty() && quality.comment_marker.is_empty() {
        return Err(MarkerGuardError::Config(
            "quality.comment_marker cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_file_names(config: &Config) -> Result<()> {
    check_section("content", config.content.iter().map(|c| c.file.as_str()))?;
    check_section(
        "dependencies",
        config.dependencies.iter().map(|d| d.file.as_str()),
    )?;
    check_section("features", config.features.iter().map(|f| f.file.as_str()))
}

fn check_section<'a>(section: &str, files: impl Iterator<Item = &'a str>) -> Result<()> {
    for (i, file) in files.enumerate() {
        if file.trim().is_empty() {
            return Err(MarkerGuardError::Config(format!(
                "{section}[{i}].file cannot be empty"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
