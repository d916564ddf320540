//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::confgroup::Defaults;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Global default scheduling values
    #[serde(default)]
    pub defaults: DefaultsSection,

    /// Registry entries, keyed by module name
    #[serde(default)]
    pub modules: BTreeMap<String, DefaultsSection>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Scheduling values, used for `[defaults]` and each `[modules.<name>]` table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    /// Update interval in seconds
    pub update_every: Option<u32>,

    /// Auto-detection retry interval in seconds
    pub autodetection_retry: Option<u32>,

    /// Scheduling priority
    pub priority: Option<u32>,
}

impl From<&DefaultsSection> for Defaults {
    fn from(section: &DefaultsSection) -> Self {
        Self {
            update_every: section.update_every,
            autodetection_retry: section.autodetection_retry,
            priority: section.priority,
        }
    }
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "yaml" or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# jobconf Configuration File

[defaults]
# Global fallback values, used when neither the job, the file nor the
# module's registry entry sets a field. CLI flags override these.
# update_every = 1
# autodetection_retry = 0
# priority = 70000

# Registry entries. Service-discovery jobs are only accepted for modules
# listed here (or passed with --module).
# [modules.nginx]
# update_every = 5

# [modules.redis]
# priority = 2000

[output]
# Output format: "yaml" or "json" (default: yaml)
# format = "yaml"
"#
    .to_string()
}
