//! Application execution logic.
//!
//! Resolves every discovery file given on the command line and prints the
//! resulting groups.

use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use jobconf::confgroup::Group;
use jobconf::config::{OutputFormat, ValidatedConfig};
use jobconf::discovery::{ParseError, Resolver};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// One or more discovery files could not be resolved.
    #[error("Failed to resolve {failed} of {total} discovery file(s)")]
    FilesFailed {
        /// Number of files that failed
        failed: usize,
        /// Number of files given
        total: usize,
    },

    /// A resolver task panicked or was cancelled.
    #[error("Resolver task failed: {0}")]
    Task(#[source] tokio::task::JoinError),

    /// Failed to encode groups as YAML.
    #[error("Failed to encode YAML output: {0}")]
    Yaml(#[source] serde_yaml::Error),

    /// Failed to encode groups as JSON.
    #[error("Failed to encode JSON output: {0}")]
    Json(#[source] serde_json::Error),

    /// Failed to write to stdout.
    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Outcome of resolving one discovery file.
type FileOutcome = Result<Option<Group>, ParseError>;

/// Executes the resolution run.
///
/// This function:
/// 1. Builds a resolver over the configured registry snapshot
/// 2. Reads and resolves every file concurrently
/// 3. Prints the groups in command-line order (empty files are skipped)
/// 4. Reports each failed file once
///
/// # Errors
///
/// Returns an error if output cannot be written, or after printing if any
/// file failed to resolve.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let resolver = Resolver::new(config.registry, config.global);

    let outcomes = resolve_all(&resolver, &config.files).await?;
    let total = outcomes.len();
    let (groups, failed) = collect_groups(outcomes);

    let output = render(&groups, config.format)?;
    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .map_err(RunError::Write)?;

    if failed > 0 {
        return Err(RunError::FilesFailed { failed, total });
    }

    tracing::info!("Resolved {} group(s) from {total} file(s)", groups.len());
    Ok(())
}

/// Reads and resolves every file on its own task.
///
/// Outcomes are returned in the order of `files`.
async fn resolve_all(resolver: &Resolver, files: &[PathBuf]) -> Result<Vec<FileOutcome>, RunError> {
    let handles: Vec<_> = files
        .iter()
        .cloned()
        .map(|path| {
            let resolver = resolver.clone();
            tokio::spawn(async move {
                let content = tokio::fs::read(&path)
                    .await
                    .map_err(|e| ParseError::FileRead {
                        path: path.clone(),
                        source: e,
                    })?;
                resolver.parse(&path, &content)
            })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        outcomes.push(handle.await.map_err(RunError::Task)?);
    }
    Ok(outcomes)
}

/// Splits outcomes into groups and a failure count, logging each file once.
fn collect_groups(outcomes: Vec<FileOutcome>) -> (Vec<Group>, usize) {
    let mut groups = Vec::with_capacity(outcomes.len());
    let mut failed = 0;

    for outcome in outcomes {
        match outcome {
            Ok(Some(group)) => {
                tracing::debug!(
                    "{}: {} job(s)",
                    group.source().display(),
                    group.len()
                );
                groups.push(group);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("{e}");
                failed += 1;
            }
        }
    }

    (groups, failed)
}

/// Encodes groups in the requested format.
fn render(groups: &[Group], format: OutputFormat) -> Result<String, RunError> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(groups).map_err(RunError::Yaml),
        OutputFormat::Json => serde_json::to_string_pretty(groups)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(RunError::Json),
    }
}
