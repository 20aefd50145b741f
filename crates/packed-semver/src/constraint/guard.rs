//! Single-bound comparison against a boundary version

use std::fmt;

use super::Check;
use crate::Version;

/// How a candidate version is compared with a guard's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardKind {
    Equal,
    /// Evaluates as "not less than the boundary". Range expansion only ever
    /// places this guard on the exclusive upper edge of a range, where that
    /// is exactly "outside the range".
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
}

impl GuardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardKind::Equal => "==",
            GuardKind::GreaterThan => ">",
            GuardKind::GreaterOrEqual => ">=",
            GuardKind::LessThan => "<",
            GuardKind::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for GuardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `candidate <kind> boundary`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guard {
    boundary: Version,
    kind: GuardKind,
}

impl Guard {
    pub fn new(boundary: Version, kind: GuardKind) -> Self {
        Guard { boundary, kind }
    }

    pub fn boundary(&self) -> &Version {
        &self.boundary
    }

    pub fn kind(&self) -> GuardKind {
        self.kind
    }
}

impl Check for Guard {
    fn check(&self, version: &Version) -> bool {
        let eq = self.boundary == *version;
        let less = !eq && *version < self.boundary;
        match self.kind {
            GuardKind::Equal => eq,
            GuardKind::GreaterThan => !less,
            GuardKind::GreaterOrEqual => eq || !less,
            GuardKind::LessThan => less,
            GuardKind::LessOrEqual => eq || less,
        }
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.boundary)
    }
}
