pub mod accessor;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod rules;

pub use error::{MarkerGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECK_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
