//! Semver facade providing high-level version operations

use crate::constraint::{Check, Constraint};
use crate::{ParseError, Version};

/// Main facade for semantic versioning operations on plain strings
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a constraint.
    ///
    /// Returns `false` when either side fails to parse.
    pub fn satisfies(version: &str, constraint: &str) -> bool {
        let version = match Version::parse(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        match Constraint::parse(constraint) {
            Ok(c) => c.check(&version),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given constraint, in input order
    pub fn satisfied_by(versions: &[&str], constraint: &str) -> Vec<String> {
        let parsed = match Constraint::parse(constraint) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| Self::satisfies_parsed(v, &parsed))
            .map(|v| v.to_string())
            .collect()
    }

    /// Parse a constraint once for repeated checks.
    pub fn parse_constraint(constraint: &str) -> Result<Constraint, ParseError> {
        Constraint::parse(constraint)
    }

    /// Check a version against a pre-parsed constraint.
    pub fn satisfies_parsed(version: &str, constraint: &Constraint) -> bool {
        Version::parse(version)
            .map(|v| constraint.check(&v))
            .unwrap_or(false)
    }

    /// Sort versions in ascending order. Unparseable entries are dropped.
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match Version::parse(v) {
                Ok(version) => Some((version, i)),
                Err(err) => {
                    log::debug!("Skipping unsortable version: {}", err);
                    None
                }
            })
            .collect();

        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
