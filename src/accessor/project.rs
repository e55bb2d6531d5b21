use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{AccessError, FileAccessor};

/// Real filesystem implementation rooted at a project directory.
#[derive(Debug, Clone)]
pub struct ProjectFiles {
    root: PathBuf,
}

impl ProjectFiles {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, file: &str) -> PathBuf {
        file.split(['/', '\\'])
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |path, part| path.join(part))
    }
}

impl FileAccessor for ProjectFiles {
    fn exists(&self, file: &str) -> bool {
        fs::metadata(self.resolve(file)).is_ok_and(|meta| meta.is_file())
    }

    fn size(&self, file: &str) -> Result<u64, AccessError> {
        let path = self.resolve(file);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(meta.len()),
            _ => Err(AccessError::NotFound { path }),
        }
    }

    fn read_text(&self, file: &str) -> Result<String, AccessError> {
        let path = self.resolve(file);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AccessError::NotFound { path });
            }
            Err(source) => return Err(AccessError::Io { path, source }),
        };
        String::from_utf8(bytes).map_err(|_| AccessError::Decode { path })
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
