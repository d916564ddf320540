//! Configuration layer for the jobconf CLI.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Global defaults (`update_every`, `autodetection_retry`, `priority`) and
//! the output format are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The module registry comes from the `[modules.<name>]` tables of the TOML
//! file. `--module` only adds names that the file does not define; it never
//! clears values set there.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, FormatArg};
pub use error::{ConfigError, field};
pub use toml::{DefaultsSection, TomlConfig, default_config_template};
pub use validated::{OutputFormat, ValidatedConfig, write_default_config};
