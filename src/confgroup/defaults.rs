//! Scheduling defaults applied to jobs.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

/// Built-in update interval in seconds.
pub const UPDATE_EVERY: u32 = 1;

/// Built-in auto-detection retry interval (0 = never retry).
pub const AUTODETECTION_RETRY: u32 = 0;

/// Built-in scheduling priority.
pub const PRIORITY: u32 = 70_000;

/// A partial set of scheduling defaults.
///
/// Used for per-module registry entries, for the file-level defaults of a
/// static discovery file, and for the values a job sets on itself.
/// `None` means the tier does not supply that field. A value that is not a
/// non-negative integer fitting `u32` decodes as `None`, the same as at job
/// level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Update interval in seconds.
    #[serde(
        default,
        deserialize_with = "lenient_uint",
        skip_serializing_if = "Option::is_none"
    )]
    pub update_every: Option<u32>,

    /// Auto-detection retry interval in seconds.
    #[serde(
        default,
        deserialize_with = "lenient_uint",
        skip_serializing_if = "Option::is_none"
    )]
    pub autodetection_retry: Option<u32>,

    /// Scheduling priority.
    #[serde(
        default,
        deserialize_with = "lenient_uint",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<u32>,
}

impl Defaults {
    /// Creates defaults that supply all three fields.
    #[must_use]
    pub const fn new(update_every: u32, autodetection_retry: u32, priority: u32) -> Self {
        Self {
            update_every: Some(update_every),
            autodetection_retry: Some(autodetection_retry),
            priority: Some(priority),
        }
    }

    /// Sets the update interval.
    #[must_use]
    pub const fn with_update_every(mut self, value: u32) -> Self {
        self.update_every = Some(value);
        self
    }

    /// Sets the auto-detection retry interval.
    #[must_use]
    pub const fn with_autodetection_retry(mut self, value: u32) -> Self {
        self.autodetection_retry = Some(value);
        self
    }

    /// Sets the scheduling priority.
    #[must_use]
    pub const fn with_priority(mut self, value: u32) -> Self {
        self.priority = Some(value);
        self
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.update_every.is_none() && self.autodetection_retry.is_none() && self.priority.is_none()
    }

    /// Fills every unset field of `self` from `lower`.
    ///
    /// `self` is the higher-precedence tier.
    #[must_use]
    pub const fn or(self, lower: &Self) -> Self {
        Self {
            update_every: or_option(self.update_every, lower.update_every),
            autodetection_retry: or_option(self.autodetection_retry, lower.autodetection_retry),
            priority: or_option(self.priority, lower.priority),
        }
    }

    /// Completes the defaults with the global fallback values.
    #[must_use]
    pub const fn resolve(&self, global: &GlobalDefaults) -> GlobalDefaults {
        GlobalDefaults {
            update_every: unwrap_or(self.update_every, global.update_every),
            autodetection_retry: unwrap_or(self.autodetection_retry, global.autodetection_retry),
            priority: unwrap_or(self.priority, global.priority),
        }
    }
}

/// Reads a scheduling value: non-negative integers that fit `u32`, nothing else.
pub(crate) fn as_uint(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|v| u32::try_from(v).ok())
}

fn lenient_uint<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_uint))
}

// `Option::or` and `Option::unwrap_or` are not const on the MSRV.
const fn or_option(high: Option<u32>, low: Option<u32>) -> Option<u32> {
    match high {
        Some(v) => Some(v),
        None => low,
    }
}

const fn unwrap_or(value: Option<u32>, fallback: u32) -> u32 {
    match value {
        Some(v) => v,
        None => fallback,
    }
}

/// Process-wide fallback defaults.
///
/// Always fully populated; consulted last when no other tier supplies a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalDefaults {
    /// Update interval in seconds.
    pub update_every: u32,
    /// Auto-detection retry interval in seconds.
    pub autodetection_retry: u32,
    /// Scheduling priority.
    pub priority: u32,
}

impl GlobalDefaults {
    /// Creates global defaults from explicit values.
    #[must_use]
    pub const fn new(update_every: u32, autodetection_retry: u32, priority: u32) -> Self {
        Self {
            update_every,
            autodetection_retry,
            priority,
        }
    }
}

impl Default for GlobalDefaults {
    fn default() -> Self {
        Self::new(UPDATE_EVERY, AUTODETECTION_RETRY, PRIORITY)
    }
}
