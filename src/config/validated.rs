//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::confgroup::{Defaults, GlobalDefaults, Registry};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// How resolved groups are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML list of groups
    Yaml,
    /// JSON array of groups
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Discovery files to resolve, in command-line order
    pub files: Vec<PathBuf>,

    /// Registry snapshot handed to the resolver
    pub registry: Registry,

    /// Global fallback defaults
    pub global: GlobalDefaults,

    /// Output format
    pub format: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ files: {}, modules: [{}], update_every: {}, autodetection_retry: {}, \
             priority: {}, format: {} }}",
            self.files.len(),
            self.registry.modules().join(", "),
            self.global.update_every,
            self.global.autodetection_retry,
            self.global.priority,
            self.format,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No discovery file is given
    /// - The global `update_every` is zero
    /// - The output format is unknown
    /// - A module name is empty
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        if cli.files.is_empty() {
            return Err(ConfigError::missing(
                field::FILES,
                "Pass one or more discovery files to resolve",
            ));
        }

        let global = Self::resolve_global(cli, toml)?;
        let registry = Self::build_registry(cli, toml)?;
        let format = Self::resolve_format(cli, toml)?;

        Ok(Self {
            files: cli.files.clone(),
            registry,
            global,
            format,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_global(cli: &Cli, toml: Option<&TomlConfig>) -> Result<GlobalDefaults, ConfigError> {
        let section = toml.map(|t| &t.defaults);

        // Priority: CLI explicit > TOML > default
        let update_every = cli
            .update_every
            .or_else(|| section.and_then(|s| s.update_every))
            .unwrap_or(defaults::UPDATE_EVERY);

        let autodetection_retry = cli
            .autodetection_retry
            .or_else(|| section.and_then(|s| s.autodetection_retry))
            .unwrap_or(defaults::AUTODETECTION_RETRY);

        let priority = cli
            .priority
            .or_else(|| section.and_then(|s| s.priority))
            .unwrap_or(defaults::PRIORITY);

        if update_every == 0 {
            return Err(ConfigError::InvalidValue {
                field: "update_every",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(GlobalDefaults::new(update_every, autodetection_retry, priority))
    }

    fn build_registry(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Registry, ConfigError> {
        let mut registry = Registry::new();

        if let Some(toml) = toml {
            for (name, section) in &toml.modules {
                validate_module_name(name)?;
                registry.register(name.clone(), Defaults::from(section));
            }
        }

        // CLI modules only add names; TOML entries keep their values
        for name in &cli.modules {
            validate_module_name(name)?;
            if !registry.contains(name) {
                registry.register(name.clone(), Defaults::default());
            }
        }

        Ok(registry)
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        // CLI takes precedence
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        let format_str = toml
            .and_then(|t| t.output.format.as_deref())
            .unwrap_or(defaults::FORMAT);

        parse_output_format(format_str)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_output_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(OutputFormat::Yaml),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat(s.to_string())),
    }
}

fn validate_module_name(name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::InvalidModule(name.to_string()));
    }
    Ok(())
}
