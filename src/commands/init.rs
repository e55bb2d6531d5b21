use std::fs;

use crate::cli::InitArgs;
use crate::config::presets;
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, MarkerGuardError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(e.error_type(), &e.to_string());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a new rule file.
///
/// # Errors
/// Returns an error if the file already exists (without --force), the preset
/// is unknown, or the file cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(MarkerGuardError::Config(format!(
            "Rule file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let content = match args.preset.as_deref() {
        Some(name) => presets::preset_source(name)?.to_string(),
        None => generate_config_template(),
    };

    fs::write(output_path, content)?;

    println!("Created rule file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# marker-guard rule file
version = "1"

# Required files: "path" = "label"
# A missing file is always an error.
[files]
"index.html" = "main page"
"main.js" = "application script"
# "style.css" = "stylesheet"

# Content markers: literal, case-sensitive substrings.
# Every file named here must also appear in [files].
[[content]]
file = "index.html"
marker = "<script src=\"main.js\""
label = "script include"
# severity = "error"  # default: warning

# Dependency declarations, reported in their own section.
# [[dependencies]]
# file = "package.json"
# marker = "\"react\""
# label = "react"

# Feature markers
[[features]]
label = "entry point"
file = "main.js"
marker = "function main"

# Quality metrics are always warnings.
[quality]
# Comment marker counted per line (default: "//")
comment_marker = "//"
# Comment occurrences per line must exceed this ratio (default: 0.1)
comment_threshold = 0.1
comment_density = ["main.js"]
line_count = ["main.js"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
