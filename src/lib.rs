//! jobconf: discovery file job resolver
//!
//! A library for turning monitoring-module discovery files into fully
//! resolved job configurations, merging job, file, module and global
//! scheduling defaults.

pub mod confgroup;
pub mod config;
pub mod discovery;
