//! Property-based tests for version ordering and constraint matching

use std::cmp::Ordering;

use packed_semver::{parse_constraint, Check, Version};
use proptest::prelude::*;

fn version_strategy() -> impl Strategy<Value = Version> {
    (0u32..1024, 0u32..1024, 0u32..1024, "([a-z]{1,6}(\\.[0-9]{1,2})?)?").prop_map(
        |(major, minor, patch, pre)| Version::with_prerelease(major, minor, patch, &pre).unwrap(),
    )
}

proptest! {
    #[test]
    fn test_parse_round_trips_fields(major in 0u32..1024, minor in 0u32..1024, patch in 0u32..1024) {
        let version = Version::parse(&format!("{}.{}.{}", major, minor, patch)).unwrap();
        prop_assert_eq!(version.major(), major);
        prop_assert_eq!(version.minor(), minor);
        prop_assert_eq!(version.patch(), patch);
        prop_assert!(!version.is_prerelease());
    }

    #[test]
    fn test_display_reparses_to_equal(version in version_strategy()) {
        let reparsed = Version::parse(&version.to_string()).unwrap();
        prop_assert_eq!(reparsed, version);
    }

    #[test]
    fn test_compare_is_reflexive(a in version_strategy()) {
        prop_assert_eq!(a.compare(&a), Ordering::Equal);
    }

    #[test]
    fn test_compare_is_antisymmetric(a in version_strategy(), b in version_strategy()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a.compare(&b) == Ordering::Equal, a == b);
    }

    #[test]
    fn test_compare_is_transitive(a in version_strategy(), b in version_strategy(), c in version_strategy()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
        if a >= b && b >= c {
            prop_assert!(a >= c);
        }
    }

    #[test]
    fn test_prerelease_below_release(major in 0u32..1024, minor in 0u32..1024, patch in 0u32..1024, pre in "[a-z]{1,6}") {
        let release = Version::new(major, minor, patch);
        let prerelease = Version::with_prerelease(major, minor, patch, &pre).unwrap();
        prop_assert!(prerelease < release);
    }

    #[test]
    fn test_next_major_resets_lower_fields(version in version_strategy()) {
        let next = version.next_major();
        prop_assert_eq!(next.minor(), 0);
        prop_assert_eq!(next.patch(), 0);
        prop_assert_eq!(next.major(), (version.major() + 1) % 1024);
        prop_assert!(!next.is_prerelease());
    }

    #[test]
    fn test_star_matches_everything(version in version_strategy()) {
        prop_assert!(parse_constraint("*").unwrap().check(&version));
    }

    #[test]
    fn test_caret_contains_its_lower_bound(major in 0u32..1023, minor in 0u32..1023, patch in 0u32..1023) {
        let version = Version::new(major, minor, patch);
        let constraint = parse_constraint(&format!("^{}", version)).unwrap();
        prop_assert!(constraint.check(&version));
        prop_assert!(!constraint.check(&version.next_major()));
    }

    #[test]
    fn test_wildcard_union(version in version_strategy()) {
        let lo_a = Version::new(1, 2, 0);
        let hi_a = Version::new(1, 3, 0);
        let lo_b = Version::new(2, 0, 0);
        let hi_b = Version::new(3, 0, 0);
        let expected = (lo_a <= version && version < hi_a) || (lo_b <= version && version < hi_b);
        prop_assert_eq!(parse_constraint("1.2.* || 2.*").unwrap().check(&version), expected);
    }
}
