//! Error types for discovery file parsing.

use std::path::PathBuf;

use thiserror::Error;

use super::shape::Shape;

/// Content could not be decoded as any supported shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The content is not valid YAML.
    #[error("invalid YAML: {0}")]
    Syntax(#[source] serde_yaml::Error),

    /// Valid YAML, but no candidate shape decodes it.
    #[error("unknown file format ({})", describe(.attempts))]
    UnknownFormat {
        /// Each shape tried, in order, with the reason it was rejected
        attempts: Vec<(Shape, serde_yaml::Error)>,
    },
}

fn describe(attempts: &[(Shape, serde_yaml::Error)]) -> String {
    attempts
        .iter()
        .map(|(shape, e)| format!("not {shape}: {e}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error type for parsing one discovery file.
///
/// Only raised when the file cannot be read or decoded. Empty files and
/// dropped jobs are not errors.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the discovery file.
    #[error("Failed to read discovery file '{}': {source}", path.display())]
    FileRead {
        /// Path to the discovery file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode the discovery file.
    #[error("Failed to parse discovery file '{}': {source}", path.display())]
    Decode {
        /// Path to the discovery file
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: DecodeError,
    },
}

impl ParseError {
    /// Path of the file that failed.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileRead { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}
