pub mod check;
pub mod init;
pub mod rules;

pub use check::{run_check, run_check_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{format_rules_text, run_rules};

use std::fs;
use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{MarkerGuardError, Result};

/// Resolve the effective rule configuration for a project.
///
/// Precedence: explicit `config` path, then `preset`, then discovery in
/// `root` (skipped when `no_config` is set).
fn load_rules_config(
    root: &Path,
    config: Option<&Path>,
    preset: Option<&str>,
    no_config: bool,
) -> Result<LoadResult> {
    let loader = FileConfigLoader::new();
    if let Some(path) = config {
        return loader.load_from_path(path);
    }
    if let Some(name) = preset {
        return loader.load_preset(name);
    }
    if no_config {
        return loader.load_preset(crate::config::presets::DEFAULT_PRESET);
    }
    loader.load(root)
}

/// Canonicalize the project root, rejecting anything that is not a directory.
fn resolve_root(root: &Path) -> Result<std::path::PathBuf> {
    let resolved = dunce::canonicalize(root).map_err(|e| {
        MarkerGuardError::Config(format!("Project root not found: {}: {e}", root.display()))
    })?;
    if !resolved.is_dir() {
        return Err(MarkerGuardError::Config(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }
    Ok(resolved)
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}
