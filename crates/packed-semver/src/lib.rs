//! Compact semantic version parsing and range constraint matching
//!
//! Versions pack `major.minor.patch` into a single `u32` (10 bits per
//! component) next to a prerelease label. Constraint expressions such as
//! `^1.2.3`, `~1.2`, `>=1.0.0, <2.0.0` or `1.2.* || 2.*` are expanded into
//! guards and combined into an AND/OR tree that is checked against versions.
//!
//! ```
//! use packed_semver::{parse_constraint, parse_version, Check};
//!
//! let constraint = parse_constraint(">=1.0, <2.0 || ^3.1").unwrap();
//! assert!(constraint.check(&parse_version("3.4.0").unwrap()));
//! assert!(!constraint.check(&parse_version("2.0.0").unwrap()));
//! ```

pub mod constraint;
mod constraint_parser;
mod error;
mod scanner;
mod semver;
mod version;

pub use constraint::{compact, Check, Constraint, Guard, GuardKind, Operator, Union};
pub use constraint_parser::parse_constraint;
pub use error::ParseError;
pub use semver::Semver;
pub use version::Version;

/// Parse a version string, see [`Version::parse`].
pub fn parse_version(input: &str) -> Result<Version, ParseError> {
    Version::parse(input)
}
