//! A single job configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use super::defaults::{Defaults, GlobalDefaults, as_uint};

/// Well-known job field names.
pub mod field {
    /// Job name.
    pub const NAME: &str = "name";
    /// Module the job belongs to.
    pub const MODULE: &str = "module";
    /// Update interval in seconds.
    pub const UPDATE_EVERY: &str = "update_every";
    /// Auto-detection retry interval in seconds.
    pub const AUTODETECTION_RETRY: &str = "autodetection_retry";
    /// Scheduling priority.
    pub const PRIORITY: &str = "priority";
}

/// One job definition as read from a discovery file.
///
/// Keeps every field of the source mapping in file order. Only `name`,
/// `module` and the three scheduling fields have meaning here; everything
/// else is passed through untouched for the module that runs the job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config(Mapping);

impl Config {
    /// Creates an empty job configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, builder style.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the raw value of a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets a field, replacing any previous value in place.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(Value::String(key.to_string()), value.into());
    }

    /// Returns `true` if the field is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the job has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The job name, if set to a non-empty string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.non_empty_str(field::NAME)
    }

    /// The module name, if set to a non-empty string.
    #[must_use]
    pub fn module(&self) -> Option<&str> {
        self.non_empty_str(field::MODULE)
    }

    /// Update interval, if set to a usable integer.
    #[must_use]
    pub fn update_every(&self) -> Option<u32> {
        self.uint(field::UPDATE_EVERY)
    }

    /// Auto-detection retry interval, if set to a usable integer.
    #[must_use]
    pub fn autodetection_retry(&self) -> Option<u32> {
        self.uint(field::AUTODETECTION_RETRY)
    }

    /// Scheduling priority, if set to a usable integer.
    #[must_use]
    pub fn priority(&self) -> Option<u32> {
        self.uint(field::PRIORITY)
    }

    /// Name qualified by module: `module` when both are equal, `module_name` otherwise.
    #[must_use]
    pub fn full_name(&self) -> String {
        let module = self.module().unwrap_or_default();
        match self.name() {
            Some(name) if name != module => format!("{module}_{name}"),
            _ => module.to_string(),
        }
    }

    /// The scheduling values this job sets on itself.
    #[must_use]
    pub fn defaults(&self) -> Defaults {
        Defaults {
            update_every: self.update_every(),
            autodetection_retry: self.autodetection_retry(),
            priority: self.priority(),
        }
    }

    /// Sets the module name.
    pub fn set_module(&mut self, module: &str) {
        self.set(field::MODULE, module);
    }

    /// Names the job after its module when it has no name of its own.
    pub fn ensure_name(&mut self) {
        if self.name().is_some() {
            return;
        }
        if let Some(module) = self.module().map(str::to_string) {
            self.set(field::NAME, module);
        }
    }

    /// Writes fully resolved scheduling values onto the job.
    pub fn set_scheduling(&mut self, values: &GlobalDefaults) {
        self.set(field::UPDATE_EVERY, values.update_every);
        self.set(field::AUTODETECTION_RETRY, values.autodetection_retry);
        self.set(field::PRIORITY, values.priority);
    }

    fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    fn uint(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(as_uint)
    }
}

impl From<Mapping> for Config {
    fn from(mapping: Mapping) -> Self {
        Self(mapping)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Config {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.set(&key.into(), value);
        }
        config
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (update_every: {}, autodetection_retry: {}, priority: {})",
            self.full_name(),
            display_opt(self.update_every()),
            display_opt(self.autodetection_retry()),
            display_opt(self.priority()),
        )
    }
}

fn display_opt(value: Option<u32>) -> String {
    value.map_or_else(|| "unset".to_string(), |v| v.to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
