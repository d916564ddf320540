//! Known modules and their default scheduling values.

use std::collections::HashMap;

use serde::Deserialize;

use super::defaults::Defaults;

/// Read-only lookup from module name to its [`Defaults`].
///
/// Owned by the module framework. Resolution only reads it, so one snapshot
/// can be shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Registry(HashMap<String, Defaults>);

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module, replacing any previous entry.
    pub fn register(&mut self, module: impl Into<String>, defaults: Defaults) {
        self.0.insert(module.into(), defaults);
    }

    /// Registers a module builder style.
    #[must_use]
    pub fn with(mut self, module: impl Into<String>, defaults: Defaults) -> Self {
        self.register(module, defaults);
        self
    }

    /// Looks up the defaults of a module.
    #[must_use]
    pub fn lookup(&self, module: &str) -> Option<&Defaults> {
        self.0.get(module)
    }

    /// Returns `true` if the module is known.
    #[must_use]
    pub fn contains(&self, module: &str) -> bool {
        self.0.contains_key(module)
    }

    /// Number of known modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no module is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Module names in sorted order.
    #[must_use]
    pub fn modules(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.0.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<K: Into<String>> FromIterator<(K, Defaults)> for Registry {
    fn from_iter<I: IntoIterator<Item = (K, Defaults)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hit_and_miss() {
        let reg = Registry::new().with("nginx", Defaults::new(5, 0, 100));

        assert_eq!(reg.lookup("nginx"), Some(&Defaults::new(5, 0, 100)));
        assert_eq!(reg.lookup("apache"), None);
    }

    #[test]
    fn module_with_empty_defaults_is_known() {
        let reg = Registry::new().with("nginx", Defaults::default());

        assert!(reg.contains("nginx"));
        assert!(reg.lookup("nginx").is_some_and(Defaults::is_empty));
    }

    #[test]
    fn register_replaces_entry() {
        let mut reg = Registry::new().with("nginx", Defaults::new(1, 1, 1));
        reg.register("nginx", Defaults::new(2, 2, 2));

        assert_eq!(reg.len(), 1);
        assert_eq!(reg.lookup("nginx"), Some(&Defaults::new(2, 2, 2)));
    }

    #[test]
    fn modules_are_sorted() {
        let reg: Registry = [
            ("redis", Defaults::default()),
            ("apache", Defaults::default()),
            ("nginx", Defaults::default()),
        ]
        .into_iter()
        .collect();

        assert_eq!(reg.modules(), ["apache", "nginx", "redis"]);
    }

    #[test]
    fn deserializes_from_yaml_mapping() {
        let reg: Registry =
            serde_yaml::from_str("nginx:\n  update_every: 5\napache: {}\n").unwrap();

        assert_eq!(reg.lookup("nginx"), Some(&Defaults::default().with_update_every(5)));
        assert!(reg.contains("apache"));
    }
}
