//! Check trait

use crate::Version;

/// Anything a candidate version can be checked against.
pub trait Check: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Whether `version` satisfies this check. Never fails.
    fn check(&self, version: &Version) -> bool;
}
