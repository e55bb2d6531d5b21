//! Naive quality metrics over raw file text.

/// Number of lines, counted as the pieces produced by splitting on `\n`.
///
/// An empty file has one (empty) line and a trailing newline starts a new one,
/// so this is always `newlines + 1` and never zero.
#[must_use]
pub fn line_count(content: &str) -> usize {
    content.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Occurrences of `marker` divided by [`line_count`].
///
/// Occurrences are non-overlapping, as found by [`str::matches`].
#[must_use]
#[allow(clippy::cast_precision_loss)] // Ratios over source files do not approach 2^52
pub fn comment_ratio(content: &str, marker: &str) -> f64 {
    if marker.is_empty() {
        return 0.0;
    }
    content.matches(marker).count() as f64 / line_count(content) as f64
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
