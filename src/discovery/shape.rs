//! Detection of the discovery file shape.
//!
//! There is no discriminator field. Each candidate shape is decoded in the
//! fixed order of [`Shape::CANDIDATES`] and the first one that decodes wins.

use std::fmt;

use serde_yaml::Value;

use crate::confgroup::Config;

use super::error::DecodeError;
use super::static_file::StaticFile;

/// A supported top-level file shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A mapping with file-level defaults and a `jobs` list.
    Static,
    /// A list of self-describing jobs.
    ServiceDiscovery,
}

impl Shape {
    /// Shapes in the order they are tried.
    pub const CANDIDATES: [Self; 2] = [Self::Static, Self::ServiceDiscovery];

    fn decode(self, value: Value) -> Result<Parsed, serde_yaml::Error> {
        match self {
            Self::Static => serde_yaml::from_value(value).map(Parsed::Static),
            Self::ServiceDiscovery => serde_yaml::from_value(value).map(Parsed::ServiceDiscovery),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::ServiceDiscovery => write!(f, "service-discovery"),
        }
    }
}

/// Decoded content of a discovery file.
#[derive(Debug)]
pub enum Parsed {
    /// A static file.
    Static(StaticFile),
    /// A service-discovery file.
    ServiceDiscovery(Vec<Config>),
    /// Nothing to resolve: empty content or an empty top-level structure.
    NoContent,
}

/// Decodes raw file content into one of the supported shapes.
///
/// # Errors
///
/// Returns an error if the content is not YAML, or is YAML that matches
/// no shape.
pub fn detect(content: &[u8]) -> Result<Parsed, DecodeError> {
    if is_blank(content) {
        return Ok(Parsed::NoContent);
    }

    let value: Value = serde_yaml::from_slice(content).map_err(DecodeError::Syntax)?;
    if is_empty_structure(&value) {
        return Ok(Parsed::NoContent);
    }

    let mut attempts = Vec::with_capacity(Shape::CANDIDATES.len());
    for shape in Shape::CANDIDATES {
        match shape.decode(value.clone()) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => attempts.push((shape, e)),
        }
    }

    Err(DecodeError::UnknownFormat { attempts })
}

/// Whitespace and comment lines only.
fn is_blank(content: &[u8]) -> bool {
    content
        .split(|&b| b == b'\n')
        .map(<[u8]>::trim_ascii)
        .all(|line| line.is_empty() || line.starts_with(b"#"))
}

fn is_empty_structure(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Mapping(m) => m.is_empty(),
        Value::Sequence(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_of(content: &str) -> Option<Shape> {
        match detect(content.as_bytes()).unwrap() {
            Parsed::Static(_) => Some(Shape::Static),
            Parsed::ServiceDiscovery(_) => Some(Shape::ServiceDiscovery),
            Parsed::NoContent => None,
        }
    }

    #[test]
    fn mapping_is_static() {
        assert_eq!(shape_of("jobs:\n  - name: local\n"), Some(Shape::Static));
    }

    #[test]
    fn mapping_without_jobs_is_static() {
        assert_eq!(shape_of("update_every: 5\n"), Some(Shape::Static));
    }

    #[test]
    fn sequence_is_service_discovery() {
        assert_eq!(
            shape_of("- name: local\n  module: nginx\n"),
            Some(Shape::ServiceDiscovery)
        );
    }

    #[test]
    fn empty_inputs_have_no_content() {
        for content in ["", "   \n\t\n", "# only a comment\n", "{}", "[]", "~"] {
            assert_eq!(shape_of(content), None, "content: {content:?}");
        }
    }

    #[test]
    fn scalar_matches_no_shape() {
        let err = detect(b"unknown").unwrap_err();

        match err {
            DecodeError::UnknownFormat { attempts } => {
                let shapes: Vec<_> = attempts.iter().map(|(shape, _)| *shape).collect();
                assert_eq!(shapes, Shape::CANDIDATES);
            }
            DecodeError::Syntax(e) => panic!("expected UnknownFormat, got syntax error: {e}"),
        }
    }

    #[test]
    fn list_of_scalars_matches_no_shape() {
        assert!(matches!(
            detect(b"- a\n- b\n"),
            Err(DecodeError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn jobs_not_a_list_matches_no_shape() {
        assert!(matches!(
            detect(b"jobs: 5\n"),
            Err(DecodeError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn broken_yaml_is_syntax_error() {
        assert!(matches!(
            detect(b"jobs: [unclosed\n"),
            Err(DecodeError::Syntax(_))
        ));
    }

    #[test]
    fn display_names_both_shapes() {
        let err = detect(b"unknown").unwrap_err().to_string();

        assert!(err.contains("static"), "{err}");
        assert!(err.contains("service-discovery"), "{err}");
    }
}
