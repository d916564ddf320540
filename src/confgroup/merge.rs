//! Precedence merge of scheduling defaults.
//!
//! Each of `update_every`, `autodetection_retry` and `priority` is resolved
//! on its own: the first tier that supplies the field wins, scanning from
//! the job itself down to the global fallback. A job can therefore take its
//! interval from the registry and its priority from the file defaults.

use super::config::Config;
use super::defaults::{Defaults, GlobalDefaults};

/// Computes the effective scheduling values for a job.
///
/// `tiers` are ordered highest precedence first and rank below the job's own
/// values. A `None` tier (e.g. a module missing from the registry)
/// contributes nothing.
#[must_use]
pub fn effective(job: &Config, tiers: &[Option<&Defaults>], global: &GlobalDefaults) -> GlobalDefaults {
    tiers
        .iter()
        .flatten()
        .fold(job.defaults(), |merged, tier| merged.or(tier))
        .resolve(global)
}

/// Writes the effective scheduling values onto the job.
pub fn apply(job: &mut Config, tiers: &[Option<&Defaults>], global: &GlobalDefaults) {
    let values = effective(job, tiers, global);
    job.set_scheduling(&values);
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
