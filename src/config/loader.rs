use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MarkerGuardError, Result};

use super::model::{CONFIG_VERSION, Config};
use super::presets::{self, DEFAULT_PRESET};

/// Rule file looked up in the project root.
pub const LOCAL_CONFIG_NAME: &str = ".marker-guard.toml";

/// Where the effective rules came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    Preset(String),
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Preset(name) => write!(f, "preset '{name}'"),
        }
    }
}

/// Result of loading a configuration, containing both the config and its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    pub origin: ConfigOrigin,
}

/// Trait for loading rule configuration from various sources.
pub trait ConfigLoader {
    /// Load `.marker-guard.toml` from `project_root`, falling back to the default preset.
    ///
    /// # Errors
    /// Returns an error if a rule file exists but cannot be read or parsed.
    fn load(&self, project_root: &Path) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;

    /// Load a built-in preset by name.
    ///
    /// # Errors
    /// Returns an error if the preset name is unknown.
    fn load_preset(&self, name: &str) -> Result<LoadResult>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Loads rule configuration from the filesystem.
///
/// Search order:
/// 1. `.marker-guard.toml` in the project root
/// 2. The built-in default preset
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config_version(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, project_root: &Path) -> Result<LoadResult> {
        let local = project_root.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&local) {
            return self.load_from_path(&local);
        }
        debug!(root = %project_root.display(), "no rule file found, using default preset");
        self.load_preset(DEFAULT_PRESET)
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| MarkerGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse_config(&content)?;
        debug!(path = %path.display(), "loaded rule file");
        Ok(LoadResult {
            config,
            origin: ConfigOrigin::File(path.to_path_buf()),
        })
    }

    fn load_preset(&self, name: &str) -> Result<LoadResult> {
        let content = presets::preset_source(name)?;
        let config = Self::parse_config(content).map_err(|e| {
            MarkerGuardError::Config(format!("Failed to parse preset '{name}': {e}"))
        })?;
        Ok(LoadResult {
            config,
            origin: ConfigOrigin::Preset(name.to_string()),
        })
    }
}

/// Validate config version. Returns an error if version is unsupported.
fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(MarkerGuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
