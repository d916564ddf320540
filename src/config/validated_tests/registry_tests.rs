//! Tests for building the module registry.

use crate::confgroup::Defaults;

use super::*;

#[test]
fn modules_from_toml() {
    let cli = cli(&["a.conf"]);
    let toml = toml(
        r"
        [modules.nginx]
        update_every = 5

        [modules.redis]
        priority = 2000
    ",
    );
    let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

    assert_eq!(
        config.registry.lookup("nginx"),
        Some(&Defaults::default().with_update_every(5))
    );
    assert_eq!(
        config.registry.lookup("redis"),
        Some(&Defaults::default().with_priority(2000))
    );
}

#[test]
fn cli_modules_are_registered_without_overrides() {
    let cli = cli(&["--module", "apache", "a.conf"]);
    let config = ValidatedConfig::from_raw(&cli, None).unwrap();

    assert_eq!(config.registry.lookup("apache"), Some(&Defaults::default()));
}

#[test]
fn cli_module_keeps_toml_values() {
    let cli = cli(&["--module", "nginx", "a.conf"]);
    let toml = toml("[modules.nginx]\nupdate_every = 5\n");
    let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

    assert_eq!(config.registry.len(), 1);
    assert_eq!(
        config.registry.lookup("nginx"),
        Some(&Defaults::default().with_update_every(5))
    );
}
