//! Diagnostic logging on stderr. Report output never goes through here.

use tracing::level_filters::LevelFilter;

/// Map `-v` count and `--quiet` to a maximum log level.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: u8, quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
