#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the marker-guard binary.
#[macro_export]
macro_rules! marker_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("marker-guard"))
    };
}

/// Rule file with one required file, one content rule and one feature.
pub const BASIC_RULES: &str = r#"
version = "1"

[files]
"index.html" = "main page"
"main.js" = "application script"

[[content]]
file = "index.html"
marker = '<div class="table-wrapper"'
label = "table element"

[[features]]
label = "virtual list"
file = "main.js"
marker = "class VirtualList"
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    /// Creates a file with raw bytes in the temp directory.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates the project-local rule file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".marker-guard.toml", content);
    }

    /// Creates a project satisfying every rule in [`BASIC_RULES`].
    pub fn create_basic_project(&self) {
        self.create_config(BASIC_RULES);
        self.create_file("index.html", "<div class=\"table-wrapper\"></div>\n");
        self.create_file("main.js", "class VirtualList {}\n");
    }
}
