//! Discovery file parsing.
//!
//! Turns the raw content of one discovery file into a [`Group`] of fully
//! resolved jobs. Two file shapes are supported:
//!
//! - **Static** - a mapping with optional file-level defaults and a `jobs`
//!   list. The file name implies the module (`nginx.conf` → `nginx`) for
//!   jobs that do not name one.
//! - **Service discovery** - a list of jobs, each naming its own module.
//!   Jobs without a module, or with a module unknown to the [`Registry`],
//!   are dropped.
//!
//! # Outcomes
//!
//! - `Err(ParseError)` - the file could not be read, or matches no shape
//! - `Ok(None)` - the file is empty
//! - `Ok(Some(group))` - resolved jobs, possibly none
//!
//! [`Group`]: crate::confgroup::Group
//! [`Registry`]: crate::confgroup::Registry

mod error;
mod parse;
mod sd_file;
pub mod shape;
mod static_file;

pub use error::{DecodeError, ParseError};
pub use parse::{Resolver, parse, parse_file};
pub use shape::{Parsed, Shape, detect};
pub use static_file::{StaticFile, implied_module};
