use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "marker-guard")]
#[command(author, version, about = "Check a project for required files, content markers and features")]
#[command(long_about = "Checks that a project contains its required files, that those files \
    contain expected markers, and that declared features are present.\n\n\
    Runs `check` on the current directory when no subcommand is given.\n\n\
    Exit codes:\n  \
    0 - All checks passed (warnings allowed)\n  \
    1 - Required checks failed\n  \
    2 - Configuration error or aborted run")]
pub struct Cli {
    /// Increase diagnostic verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a project against its rules
    Check(CheckArgs),

    /// Generate a rule file template
    Init(InitArgs),

    /// Rule file utilities
    Rules(RulesArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Project root to check
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to rule file (default: <ROOT>/.marker-guard.toml)
    #[arg(short, long, conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Use a built-in rule preset
    #[arg(long)]
    pub preset: Option<String>,

    /// Skip rule file discovery and use the default preset
    #[arg(long)]
    pub no_config: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            config: None,
            preset: None,
            no_config: false,
            format: OutputFormat::Text,
            output: None,
        }
    }
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the rule file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Start from a built-in preset instead of the commented template
    #[arg(long)]
    pub preset: Option<String>,

    /// Overwrite existing rule file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub action: RulesAction,
}

#[derive(Subcommand, Debug)]
pub enum RulesAction {
    /// Validate rule file syntax and structure
    Validate {
        /// Path to rule file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective rule set
    Show {
        /// Project root used for rule file discovery
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Path to rule file
        #[arg(short, long, conflicts_with = "preset")]
        config: Option<PathBuf>,

        /// Use a built-in rule preset
        #[arg(long)]
        preset: Option<String>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
