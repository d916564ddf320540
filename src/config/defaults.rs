//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

pub use crate::confgroup::defaults::{AUTODETECTION_RETRY, PRIORITY, UPDATE_EVERY};

/// Default output format for resolved groups.
pub const FORMAT: &str = "yaml";

/// Default path of the file written by `init`.
pub const CONFIG_FILE: &str = "jobconf.toml";
