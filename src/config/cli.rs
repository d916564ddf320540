//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::defaults;

/// jobconf: resolve job configurations from discovery files
///
/// Reads static and service-discovery files, applies job, file, module and
/// global defaults, and prints the resolved jobs of every file.
#[derive(Debug, Parser)]
#[command(name = "jobconf")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Discovery files to resolve (required for run mode)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Global default update interval in seconds
    #[arg(long = "update-every")]
    pub update_every: Option<u32>,

    /// Global default auto-detection retry interval in seconds
    #[arg(long = "autodetection-retry")]
    pub autodetection_retry: Option<u32>,

    /// Global default scheduling priority
    #[arg(long)]
    pub priority: Option<u32>,

    /// Register a module without default overrides (can be specified multiple times)
    #[arg(long = "module", value_name = "NAME")]
    pub modules: Vec<String>,

    /// Output format for resolved groups
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for jobconf
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// YAML list of groups
    Yaml,
    /// JSON array of groups
    Json,
}

impl From<FormatArg> for super::validated::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => Self::Yaml,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
