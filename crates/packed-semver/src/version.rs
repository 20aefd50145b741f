//! Packed semantic version value

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::scanner::{is_dash, is_dot, is_plus, read_label, read_num, skip_leading, skip_spaces};

/// Mask of a single 10-bit component.
pub(crate) const FIELD_MASK: u32 = 0x3FF;
const MAJOR_SHIFT: u32 = 20;
const MINOR_SHIFT: u32 = 10;
/// Bits holding the major component.
pub(crate) const MAJOR_BITS: u32 = 0x3FF0_0000;
/// Bits holding the major and minor components.
pub(crate) const MAJOR_MINOR_BITS: u32 = 0x3FFF_FC00;

/// A concrete semantic version.
///
/// Major, minor and patch are packed into one `u32` as three 10-bit fields:
///
/// ```text
/// 0b00 MMMMMMMMMM mmmmmmmmmm pppppppppp
///    |     |          |          '--- patch
///    |     |          '--- minor
///    |     '--- major
///    '--- unused
/// ```
///
/// so each component ranges over `0..=1023`. Larger values wrap modulo 1024,
/// both when parsing and in the successor/predecessor operations.
///
/// The prerelease label is kept verbatim; an empty label means a release.
/// Build metadata is accepted by the parser and discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    base: u32,
    pre: String,
}

impl Version {
    /// Build a release version from explicit components, masking each into 10 bits.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            base: pack(major, minor, patch),
            pre: String::new(),
        }
    }

    /// Build a prerelease version. The label may only contain alphanumerics,
    /// dots and dashes; an empty label yields a release.
    pub fn with_prerelease(major: u32, minor: u32, patch: u32, pre: &str) -> Result<Self, ParseError> {
        let (label, end) = read_label(pre, 0);
        if end != pre.len() {
            let input = format!("{}.{}.{}-{}", major, minor, patch, pre);
            let position = input.len() - pre.len() + end;
            return Err(ParseError::invalid_format(&input, position));
        }
        Ok(Version {
            base: pack(major, minor, patch),
            pre: label.to_string(),
        })
    }

    pub(crate) fn from_parts(base: u32, pre: String) -> Self {
        Version { base, pre }
    }

    /// Parse a version string such as `1.2.3`, `v1.2`, `1.2.3-beta.2+build.5`.
    ///
    /// Missing minor or patch components default to 0.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let bytes = input.as_bytes();
        let mut components = [0u32; 3];
        let mut count = 0;
        let mut i = skip_leading(bytes, 0);

        loop {
            if count == components.len() {
                return Err(ParseError::invalid_format(input, i));
            }
            let (value, next) = read_num(bytes, i).ok_or_else(|| ParseError::invalid_format(input, i))?;
            components[count] = (value & u64::from(FIELD_MASK)) as u32;
            count += 1;
            i = next;
            if i < bytes.len() && is_dot(bytes[i]) {
                i += 1;
                continue;
            }
            break;
        }

        let mut pre = "";
        if i < bytes.len() && is_dash(bytes[i]) {
            let (label, next) = read_label(input, i + 1);
            if label.is_empty() {
                return Err(ParseError::invalid_format(input, i + 1));
            }
            pre = label;
            i = next;
        }

        if i < bytes.len() && is_plus(bytes[i]) {
            let (build, next) = read_label(input, i + 1);
            if build.is_empty() {
                return Err(ParseError::invalid_format(input, i + 1));
            }
            i = next;
        }

        i = skip_spaces(bytes, i);
        if i != bytes.len() {
            return Err(ParseError::invalid_format(input, i));
        }

        Ok(Version {
            base: pack(components[0], components[1], components[2]),
            pre: pre.to_string(),
        })
    }

    /// The packed `major.minor.patch` integer.
    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn major(&self) -> u32 {
        (self.base >> MAJOR_SHIFT) & FIELD_MASK
    }

    pub fn minor(&self) -> u32 {
        (self.base >> MINOR_SHIFT) & FIELD_MASK
    }

    pub fn patch(&self) -> u32 {
        self.base & FIELD_MASK
    }

    /// The prerelease label, empty for a release.
    pub fn prerelease(&self) -> &str {
        &self.pre
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// `(major + 1).0.0`
    pub fn next_major(&self) -> Version {
        Version::from_parts((self.major().wrapping_add(1) & FIELD_MASK) << MAJOR_SHIFT, String::new())
    }

    /// `(major - 1).0.0`
    pub fn previous_major(&self) -> Version {
        Version::from_parts((self.major().wrapping_sub(1) & FIELD_MASK) << MAJOR_SHIFT, String::new())
    }

    /// `major.(minor + 1).0`
    pub fn next_minor(&self) -> Version {
        Version::from_parts(
            (self.base & MAJOR_BITS) | ((self.minor().wrapping_add(1) & FIELD_MASK) << MINOR_SHIFT),
            String::new(),
        )
    }

    /// `major.(minor - 1).0`
    pub fn previous_minor(&self) -> Version {
        Version::from_parts(
            (self.base & MAJOR_BITS) | ((self.minor().wrapping_sub(1) & FIELD_MASK) << MINOR_SHIFT),
            String::new(),
        )
    }

    /// `major.minor.(patch + 1)`
    pub fn next_patch(&self) -> Version {
        Version::from_parts(
            (self.base & MAJOR_MINOR_BITS) | (self.patch().wrapping_add(1) & FIELD_MASK),
            String::new(),
        )
    }

    /// `major.minor.(patch - 1)`
    pub fn previous_patch(&self) -> Version {
        Version::from_parts(
            (self.base & MAJOR_MINOR_BITS) | (self.patch().wrapping_sub(1) & FIELD_MASK),
            String::new(),
        )
    }

    /// Total order over versions, see the `Ord` implementation.
    pub fn compare(&self, other: &Version) -> Ordering {
        self.cmp(other)
    }
}

pub(crate) fn pack(major: u32, minor: u32, patch: u32) -> u32 {
    ((major & FIELD_MASK) << MAJOR_SHIFT) | ((minor & FIELD_MASK) << MINOR_SHIFT) | (patch & FIELD_MASK)
}

/// Versions order by their packed base first. With equal bases a release
/// sorts above any prerelease, and two prerelease labels compare as plain
/// strings (`beta.10 < beta.2`), not identifier by identifier.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.base
            .cmp(&other.base)
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}
