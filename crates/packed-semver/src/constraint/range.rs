//! Range expansion: turning one `<op><pattern>` term into guards
//!
//! A version pattern with wildcards (or with trailing components left out)
//! covers a half-open range of versions. Each operator picks the edges of
//! that range it needs and turns them into one or two guards.

use super::{Constraint, Guard, GuardKind, Union};
use crate::version::{MAJOR_BITS, MAJOR_MINOR_BITS};
use crate::Version;

/// Wildcard bit for the patch component.
pub(crate) const WILDCARD_PATCH: u8 = 1;
/// Wildcard bit for the minor component.
pub(crate) const WILDCARD_MINOR: u8 = 2;
/// Wildcard bit for the major component.
pub(crate) const WILDCARD_MAJOR: u8 = 4;

/// The version part of a constraint term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pattern {
    /// Parsed components; wildcarded and missing ones are 0.
    pub(crate) version: Version,
    /// The single most significant wildcard bit, or 0 for an exact version.
    pub(crate) wildcard: u8,
}

impl Pattern {
    /// Number of leading components fixed before the first wildcard.
    pub(crate) fn significant(&self) -> usize {
        match self.wildcard {
            0 => 3,
            WILDCARD_PATCH => 2,
            WILDCARD_MINOR => 1,
            _ => 0,
        }
    }
}

/// One or two guards and how they combine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Guards {
    pub(crate) left: Guard,
    pub(crate) right: Option<Guard>,
    pub(crate) union: Union,
}

impl Guards {
    fn single(boundary: Version, kind: GuardKind) -> Self {
        Guards {
            left: Guard::new(boundary, kind),
            right: None,
            union: Union::Or,
        }
    }

    fn pair(left: Guard, right: Guard, union: Union) -> Self {
        Guards {
            left,
            right: Some(right),
            union,
        }
    }

    /// `>= lo || < lo`, true for every version.
    fn everything(lo: Version) -> Self {
        Guards::pair(
            Guard::new(lo.clone(), GuardKind::GreaterOrEqual),
            Guard::new(lo, GuardKind::LessThan),
            Union::Or,
        )
    }

    /// `< lo && >= lo`, true for no version.
    fn nothing(lo: Version) -> Self {
        Guards::pair(
            Guard::new(lo.clone(), GuardKind::LessThan),
            Guard::new(lo, GuardKind::GreaterOrEqual),
            Union::And,
        )
    }

    pub(crate) fn into_constraint(self) -> Constraint {
        Constraint::from_guards(self.left, self.right, self.union)
    }
}

pub(crate) type RangeRule = fn(&Pattern) -> Guards;

/// `[lo, hi)`; `hi` is `None` when the pattern is wildcarded from the major
/// component down, and equals `lo` for an exact version.
struct Range {
    lo: Version,
    hi: Option<Version>,
    exact: bool,
}

fn expand_range(pattern: &Pattern) -> Range {
    let version = &pattern.version;
    let pre = version.prerelease().to_string();
    match pattern.wildcard {
        0 => Range {
            lo: version.clone(),
            hi: Some(version.clone()),
            exact: true,
        },
        WILDCARD_PATCH => Range {
            lo: Version::from_parts(version.base() & MAJOR_MINOR_BITS, pre),
            hi: Some(version.next_minor()),
            exact: false,
        },
        WILDCARD_MINOR => Range {
            lo: Version::from_parts(version.base() & MAJOR_BITS, pre),
            hi: Some(version.next_major()),
            exact: false,
        },
        _ => Range {
            lo: Version::from_parts(0, pre),
            hi: None,
            exact: false,
        },
    }
}

pub(crate) fn tilde_or_equal(pattern: &Pattern) -> Guards {
    let range = expand_range(pattern);
    match range.hi {
        None => Guards::everything(range.lo),
        Some(hi) if range.exact => Guards::single(hi, GuardKind::Equal),
        Some(hi) => Guards::pair(
            Guard::new(range.lo, GuardKind::GreaterOrEqual),
            Guard::new(hi, GuardKind::LessThan),
            Union::And,
        ),
    }
}

pub(crate) fn not_equal(pattern: &Pattern) -> Guards {
    let range = expand_range(pattern);
    match range.hi {
        None => Guards::nothing(range.lo),
        Some(hi) => Guards::pair(
            Guard::new(range.lo, GuardKind::LessThan),
            Guard::new(hi, GuardKind::GreaterThan),
            Union::Or,
        ),
    }
}

/// `>1.2` rounds up to `>=1.3.0`: the guard sits on the exclusive upper edge.
pub(crate) fn greater_than(pattern: &Pattern) -> Guards {
    let range = expand_range(pattern);
    match range.hi {
        None => Guards::nothing(range.lo),
        Some(hi) => Guards::single(hi, GuardKind::GreaterThan),
    }
}

pub(crate) fn greater_or_equal(pattern: &Pattern) -> Guards {
    let range = expand_range(pattern);
    match range.hi {
        None => Guards::everything(range.lo),
        Some(_) => Guards::single(range.lo, GuardKind::GreaterOrEqual),
    }
}

pub(crate) fn less_than(pattern: &Pattern) -> Guards {
    let range = expand_range(pattern);
    match range.hi {
        None => Guards::nothing(range.lo),
        Some(_) => Guards::single(range.lo, GuardKind::LessThan),
    }
}

/// `<=1.2` means `<1.3.0`; only an exact version keeps `<=`.
pub(crate) fn less_or_equal(pattern: &Pattern) -> Guards {
    let range = expand_range(pattern);
    match range.hi {
        None => Guards::everything(range.lo),
        Some(hi) if range.exact => Guards::single(hi, GuardKind::LessOrEqual),
        Some(hi) => Guards::single(hi, GuardKind::LessThan),
    }
}

/// `~1.2.3` and `~1.2` allow minor-level changes, `~1` major-level ones.
pub(crate) fn tilde(pattern: &Pattern) -> Guards {
    let lo = expand_range(pattern).lo;
    let upper = match pattern.significant() {
        0 => return Guards::single(lo, GuardKind::GreaterOrEqual),
        1 => lo.next_major(),
        _ => lo.next_minor(),
    };
    Guards::pair(
        Guard::new(lo, GuardKind::GreaterOrEqual),
        Guard::new(upper, GuardKind::LessThan),
        Union::And,
    )
}

/// Changes are allowed below the left-most non-zero component. A wildcard
/// counts as non-zero, so `^0.x` behaves like `^0`.
pub(crate) fn caret(pattern: &Pattern) -> Guards {
    let lo = expand_range(pattern).lo;
    let significant = pattern.significant();
    if significant == 0 {
        return Guards::single(lo, GuardKind::GreaterOrEqual);
    }
    let upper = if lo.major() > 0 || significant == 1 {
        lo.next_major()
    } else if lo.minor() > 0 || significant == 2 {
        lo.next_minor()
    } else {
        lo.next_patch()
    };
    Guards::pair(
        Guard::new(lo, GuardKind::GreaterOrEqual),
        Guard::new(upper, GuardKind::LessThan),
        Union::And,
    )
}
