mod error_output;
mod json;
mod text;

pub use error_output::{ErrorOutput, print_error, print_error_full};
pub use json::JsonFormatter;
pub use text::{ReportHeader, TextFormatter};

use crate::checker::CheckReport;
use crate::error::Result;

/// Trait for formatting check reports into various output formats.
pub trait OutputFormatter {
    /// Format the check report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &CheckReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
