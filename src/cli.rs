use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
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
#[command(name = "h5lint")]
#[command(
    author,
    version,
    about = "Structural, semantic and safety scanner for hierarchical container files"
)]
#[command(long_about = "Walks the object graph of a container file and reports broken or \
    suspicious links, oversized or mis-named attributes, NaN/Inf values, chunk layout \
    problems and safety-relevant features as a JSON document.\n\n\
    Exit codes:\n  \
    0 - No error or safety findings (or --soft-fail)\n  \
    1 - Error or safety findings present\n  \
    2 - File missing, unreadable, or configuration error")]
pub struct Cli {
    /// Container file to scan
    pub file: PathBuf,

    /// Exit 0 even if error or safety findings are present
    #[arg(long)]
    pub soft_fail: bool,

    /// Path to configuration file
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Output format [possible values: json, text]
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner and logs below error
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
