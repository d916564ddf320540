//! Service-discovery files.
//!
//! A flat list of jobs emitted by a service-discovery process. Each job
//! names its module; there is no filename convention and no file-level
//! defaults tier.

use std::path::Path;

use tracing::debug;

use crate::confgroup::{Config, GlobalDefaults, Registry, merge};

/// Resolves the jobs of a service-discovery file.
///
/// Jobs without a module, or whose module is not in the registry, are
/// dropped.
pub(super) fn resolve(
    registry: &Registry,
    global: &GlobalDefaults,
    source: &Path,
    jobs: Vec<Config>,
) -> Vec<Config> {
    jobs.into_iter()
        .enumerate()
        .filter_map(|(index, mut job)| {
            let Some(module) = job.module() else {
                debug!(source = %source.display(), index, "dropping job without module");
                return None;
            };
            let Some(module_defaults) = registry.lookup(module) else {
                debug!(
                    source = %source.display(),
                    index,
                    module,
                    "dropping job of unknown module"
                );
                return None;
            };

            merge::apply(&mut job, &[Some(module_defaults)], global);
            job.ensure_name();
            Some(job)
        })
        .collect()
}
