use std::path::PathBuf;

use thiserror::Error;

use crate::accessor::AccessError;

#[derive(Error, Debug)]
pub enum MarkerGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An existing file could not be read as text. Aborts the run.
    #[error("File is not valid UTF-8 text: {path}")]
    Decode { path: PathBuf },

    /// An existing file could not be read during evaluation. Aborts the run.
    #[error("Failed to read project file: {path}")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl MarkerGuardError {
    /// Short category name, used as the heading of stderr error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Decode { .. } => "Decode",
            Self::ContentRead { .. } => "ContentRead",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Returns `true` for failures that abort evaluation of an otherwise valid rule set.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::ContentRead { .. })
    }
}

impl From<AccessError> for MarkerGuardError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::NotFound { path } => Self::ContentRead {
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                path,
            },
            AccessError::Decode { path } => Self::Decode { path },
            AccessError::Io { path, source } => Self::ContentRead { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, MarkerGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
