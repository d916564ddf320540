//! Process-level glue for the jobconf binary.
//!
//! Exit statuses, user-facing hints for configuration mistakes, and the
//! stderr log sink.

use jobconf::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Process exit statuses.
pub mod exit_code {
    use std::process::ExitCode;

    /// Every file resolved and the output was written.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Arguments or the TOML file were rejected before any file was read.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// At least one discovery file failed, or output could not be written.
    ///
    /// `ExitCode::from` is not `const`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Follow-up advice for a configuration error, if there is any to give.
#[must_use]
pub fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::FILES => {
            Some("Usage: jobconf [OPTIONS] <FILE>...")
        }
        ConfigError::FileRead { .. } => {
            Some("Run 'jobconf init' to write a registry template, then pass it with --config.")
        }
        ConfigError::TomlParse(_) => {
            Some("Allowed tables are [defaults], [modules.<name>] and [output].")
        }
        ConfigError::InvalidFormat(_) => Some("Set --format or [output] format to yaml or json."),
        _ => None,
    }
}

/// Prints the hint for `error` to stderr.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Installs the stderr log sink.
///
/// `RUST_LOG` overrides the level; `--verbose` lowers the default to debug,
/// which reports every dropped job and every resolved group.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_files_hint_shows_usage() {
        let error = ConfigError::missing(field::FILES, "pass files");

        assert!(config_hint(&error).is_some_and(|h| h.starts_with("Usage: jobconf")));
    }

    #[test]
    fn unreadable_config_suggests_init() {
        let error = ConfigError::FileRead {
            path: PathBuf::from("jobconf.toml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(config_hint(&error).is_some_and(|h| h.contains("jobconf init")));
    }

    #[test]
    fn bad_format_lists_choices() {
        let error = ConfigError::InvalidFormat("xml".to_string());

        assert!(config_hint(&error).is_some_and(|h| h.contains("yaml or json")));
    }

    #[test]
    fn invalid_value_has_no_hint() {
        let error = ConfigError::InvalidValue {
            field: "update_every",
            reason: "must be greater than 0".to_string(),
        };

        assert_eq!(config_hint(&error), None);
    }
}
