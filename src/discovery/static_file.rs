//! Static discovery files.
//!
//! A static file belongs to one module, named after the file: `nginx.conf`
//! holds `nginx` jobs. File-level defaults may be written at the top level
//! or in a `default` section:
//!
//! ```yaml
//! update_every: 5
//! jobs:
//!   - name: local
//!     url: http://127.0.0.1/stub_status
//!   - name: remote
//!     module: nginxplus
//!     priority: 1000
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::confgroup::{Config, Defaults, GlobalDefaults, Registry, merge};

/// Decoded content of a static discovery file.
#[derive(Debug, Default, Deserialize)]
pub struct StaticFile {
    /// Explicit file-level defaults section.
    #[serde(default)]
    pub default: Defaults,

    /// File-level defaults written at the top level.
    #[serde(flatten)]
    pub inline: Defaults,

    /// Jobs in file order.
    #[serde(default)]
    pub jobs: Vec<Config>,
}

impl StaticFile {
    /// Effective file-level defaults; the `default` section wins over top-level keys.
    #[must_use]
    pub const fn file_defaults(&self) -> Defaults {
        self.default.or(&self.inline)
    }
}

/// Module implied by a static file's name: the base name without extension.
#[must_use]
pub fn implied_module(source: &Path) -> String {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Resolves every job of a static file. No job is dropped.
pub(super) fn resolve(
    registry: &Registry,
    global: &GlobalDefaults,
    source: &Path,
    file: StaticFile,
) -> Vec<Config> {
    let implied = implied_module(source);
    let file_defaults = file.file_defaults();

    file.jobs
        .into_iter()
        .map(|mut job| {
            let module = job.module().map_or_else(|| implied.clone(), str::to_string);
            let module_defaults = registry.lookup(&module);
            if module_defaults.is_none() {
                debug!(
                    source = %source.display(),
                    module = %module,
                    "module not in registry, skipping its defaults"
                );
            }

            merge::apply(&mut job, &[Some(&file_defaults), module_defaults], global);
            job.set_module(&module);
            job.ensure_name();
            job
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implied_module_strips_extension() {
        assert_eq!(implied_module(Path::new("/etc/jobs/nginx.conf")), "nginx");
        assert_eq!(implied_module(Path::new("redis")), "redis");
        assert_eq!(implied_module(Path::new("web.log.yaml")), "web.log");
    }

    #[test]
    fn default_section_wins_over_inline_keys() {
        let file: StaticFile = serde_yaml::from_str(
            "update_every: 5\npriority: 7\ndefault:\n  update_every: 9\njobs: []\n",
        )
        .unwrap();

        assert_eq!(
            file.file_defaults(),
            Defaults::default().with_update_every(9).with_priority(7)
        );
    }

    #[test]
    fn decodes_without_jobs_key() {
        let file: StaticFile = serde_yaml::from_str("autodetection_retry: 3\n").unwrap();

        assert!(file.jobs.is_empty());
        assert_eq!(file.inline, Defaults::default().with_autodetection_retry(3));
    }
}
