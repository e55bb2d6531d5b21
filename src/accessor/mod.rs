//! Read-only access to the files of the project under inspection.
//!
//! The evaluator never touches storage directly; it goes through a
//! [`FileAccessor`] so tests can substitute an in-memory double.

mod project;

pub use project::ProjectFiles;

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a size or content lookup.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("File is not valid UTF-8 text: {path}")]
    Decode { path: PathBuf },

    #[error("Failed to read file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Trait for project file lookups (for testability).
///
/// File identifiers are paths relative to the project root, using `/` separators.
pub trait FileAccessor {
    /// Check whether a regular file exists.
    ///
    /// Never fails: a missing file and a file that cannot be inspected both yield `false`.
    fn exists(&self, file: &str) -> bool;

    /// Size of the file in bytes.
    ///
    /// # Errors
    /// Returns [`AccessError::NotFound`] if the file does not exist.
    fn size(&self, file: &str) -> Result<u64, AccessError>;

    /// Read the whole file as UTF-8 text.
    ///
    /// # Errors
    /// Returns [`AccessError::NotFound`] if the file does not exist,
    /// [`AccessError::Decode`] if the bytes are not valid UTF-8, or
    /// [`AccessError::Io`] for any other read failure.
    fn read_text(&self, file: &str) -> Result<String, AccessError>;
}

impl<T: FileAccessor + ?Sized> FileAccessor for &T {
    fn exists(&self, file: &str) -> bool {
        (**self).exists(file)
    }

    fn size(&self, file: &str) -> Result<u64, AccessError> {
        (**self).size(file)
    }

    fn read_text(&self, file: &str) -> Result<String, AccessError> {
        (**self).read_text(file)
    }
}
