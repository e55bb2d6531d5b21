//! Error output on stderr, kept apart from the check report.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a new error output formatter with the specified color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stderr().is_terminal(),
        };
        Self { use_colors }
    }

    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    /// Prints an error message with detail.
    pub fn print_error_with_detail(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail, suggestion);
    }

    /// Writes error to a writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on stderr are ignored; there is nowhere left to report them.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Convenience function: prints an error using auto-detected color mode.
pub fn print_error(error_type: &str, message: &str) {
    ErrorOutput::stderr().print_error_with_detail(error_type, message, None, None);
}

/// Convenience function: prints an error with detail and suggestion.
pub fn print_error_full(
    error_type: &str,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) {
    ErrorOutput::stderr().print_error_with_detail(error_type, message, detail, suggestion);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
