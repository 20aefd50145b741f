//! Error type for version and constraint parsing

use thiserror::Error;

/// Error returned when a version or a constraint cannot be parsed.
///
/// Parsing is all-or-nothing: no partial result accompanies an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The version string does not follow `[v]major[.minor[.patch]][-pre][+build]`.
    #[error("Invalid version string \"{input}\" around position {position}")]
    InvalidFormat { input: String, position: usize },

    /// The operator in front of a constraint term is not a recognised spelling.
    #[error("Unknown operator \"{operator}\" in constraint \"{term}\"")]
    UnknownOperator { operator: String, term: String },

    /// The version pattern of a constraint term is invalid.
    #[error("Could not parse version constraint \"{term}\" around position {position}")]
    MalformedVersion { term: String, position: usize },
}

impl ParseError {
    pub(crate) fn invalid_format(input: &str, position: usize) -> Self {
        ParseError::InvalidFormat {
            input: input.to_string(),
            position,
        }
    }

    pub(crate) fn malformed_version(term: &str, position: usize) -> Self {
        ParseError::MalformedVersion {
            term: term.to_string(),
            position,
        }
    }
}
