//! Resolved jobs of one discovery file.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::config::Config;

/// The fully resolved jobs of one source file.
///
/// Every config carries `name`, `module`, `update_every`,
/// `autodetection_retry` and `priority`, in the order the jobs appear in
/// the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    /// Path of the originating file, verbatim.
    pub source: PathBuf,

    /// Resolved jobs. May be empty when every job was filtered out.
    pub configs: Vec<Config>,
}

impl Group {
    /// Ties resolved configs to their source file.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, configs: Vec<Config>) -> Self {
        Self {
            source: source.into(),
            configs,
        }
    }

    /// Path of the originating file.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Number of resolved jobs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Returns `true` if no job survived resolution.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
