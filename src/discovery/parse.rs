//! Turning one discovery file into a [`Group`].

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::confgroup::{GlobalDefaults, Group, Registry};

use super::error::ParseError;
use super::sd_file;
use super::shape::{self, Parsed};
use super::static_file;

/// Resolves the jobs in `content`, read from `source`.
///
/// Returns `Ok(None)` when the content is empty, and a group with no
/// configs when the file decoded but every job was dropped.
///
/// # Errors
///
/// Returns [`ParseError::Decode`] if the content matches no supported shape.
pub fn parse(
    registry: &Registry,
    global: &GlobalDefaults,
    source: &Path,
    content: &[u8],
) -> Result<Option<Group>, ParseError> {
    let parsed = shape::detect(content).map_err(|e| ParseError::Decode {
        path: source.to_path_buf(),
        source: e,
    })?;

    let configs = match parsed {
        Parsed::NoContent => {
            debug!(source = %source.display(), "no content");
            return Ok(None);
        }
        Parsed::Static(file) => static_file::resolve(registry, global, source, file),
        Parsed::ServiceDiscovery(jobs) => sd_file::resolve(registry, global, source, jobs),
    };

    for config in &configs {
        debug!(source = %source.display(), job = %config, "resolved job");
    }

    Ok(Some(Group::new(source, configs)))
}

/// Reads and resolves a discovery file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn parse_file(
    registry: &Registry,
    global: &GlobalDefaults,
    path: &Path,
) -> Result<Option<Group>, ParseError> {
    let content = std::fs::read(path).map_err(|e| ParseError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(registry, global, path, &content)
}

/// A registry snapshot paired with the global defaults.
///
/// Cheap to clone and safe to share across threads; each resolution only
/// reads the snapshot it was created with.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    registry: Arc<Registry>,
    global: GlobalDefaults,
}

impl Resolver {
    /// Creates a resolver over a registry snapshot.
    #[must_use]
    pub fn new(registry: impl Into<Arc<Registry>>, global: GlobalDefaults) -> Self {
        Self {
            registry: registry.into(),
            global,
        }
    }

    /// The registry snapshot.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The global fallback defaults.
    #[must_use]
    pub const fn global(&self) -> &GlobalDefaults {
        &self.global
    }

    /// See [`parse`].
    ///
    /// # Errors
    ///
    /// Returns an error if the content matches no supported shape.
    pub fn parse(&self, source: &Path, content: &[u8]) -> Result<Option<Group>, ParseError> {
        parse(&self.registry, &self.global, source, content)
    }

    /// See [`parse_file`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn parse_file(&self, path: &Path) -> Result<Option<Group>, ParseError> {
        parse_file(&self.registry, &self.global, path)
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
