use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::accessor::{AccessError, FileAccessor};

/// In-memory accessor that records how often each file is read.
pub struct MockAccessor {
    files: HashMap<String, Vec<u8>>,
    reads: Mutex<HashMap<String, usize>>,
}

impl MockAccessor {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            reads: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.with_bytes(name, content.as_bytes())
    }

    pub fn with_bytes(mut self, name: &str, content: &[u8]) -> Self {
        self.files.insert(name.to_string(), content.to_vec());
        self
    }

    pub fn reads_of(&self, name: &str) -> usize {
        self.reads.lock().unwrap().get(name).copied().unwrap_or(0)
    }

    pub fn total_reads(&self) -> usize {
        self.reads.lock().unwrap().values().sum()
    }
}

impl FileAccessor for MockAccessor {
    fn exists(&self, file: &str) -> bool {
        self.files.contains_key(file)
    }

    fn size(&self, file: &str) -> Result<u64, AccessError> {
        self.files
            .get(file)
            .map(|bytes| bytes.len() as u64)
            .ok_or_else(|| AccessError::NotFound {
                path: PathBuf::from(file),
            })
    }

    fn read_text(&self, file: &str) -> Result<String, AccessError> {
        *self
            .reads
            .lock()
            .unwrap()
            .entry(file.to_string())
            .or_default() += 1;
        let bytes = self.files.get(file).ok_or_else(|| AccessError::NotFound {
            path: PathBuf::from(file),
        })?;
        String::from_utf8(bytes.clone()).map_err(|_| AccessError::Decode {
            path: PathBuf::from(file),
        })
    }
}
