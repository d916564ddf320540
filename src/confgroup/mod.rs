//! Job configurations and their scheduling defaults.
//!
//! This module provides:
//! - Job configuration maps ([`Config`])
//! - Partial and global scheduling defaults ([`Defaults`], [`GlobalDefaults`])
//! - The per-module defaults registry ([`Registry`])
//! - The resolved output of one file ([`Group`])
//! - The precedence merge ([`merge`])
//!
//! # Priority
//!
//! Scheduling fields are resolved with the following priority (highest to lowest):
//!
//! 1. **Job** - Values set on the job itself
//! 2. **File** - File-level defaults (static files only)
//! 3. **Module** - The module's registry entry
//! 4. **Global** - [`GlobalDefaults`], always fully populated
//!
//! Each field is resolved independently.

mod config;
pub mod defaults;
mod group;
pub mod merge;
mod registry;

pub use config::{Config, field};
pub use defaults::{Defaults, GlobalDefaults};
pub use group::Group;
pub use registry::Registry;
