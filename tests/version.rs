use std::cmp::Ordering;
use std::collections::HashSet;

use questionpy_common::{APIVersion, ComparableVersion, SemVer, VersionError};
use rstest::rstest;

#[rstest]
#[case(0, 0)]
#[case(0, 1)]
#[case(1, 0)]
#[case(42, 21)]
#[case(u64::MAX, u64::MAX)]
fn api_version_round_trips_through_string(#[case] major: u64, #[case] minor: u64) {
    let version = APIVersion::new(major, minor);
    let reparsed = APIVersion::from_string(&version.to_string()).unwrap();

    assert_eq!(reparsed, version);
    assert_eq!(reparsed.to_string(), version.to_string());
}

#[rstest]
#[case(SemVer::new(0, 0, 0))]
#[case(SemVer::new(1, 2, 3).with_prerelease("alpha.1"))]
#[case(SemVer::new(1, 2, 3).with_build("build.007"))]
#[case(SemVer::new(10, 20, 30).with_prerelease("rc.1").with_build("sha.5114f85"))]
fn semver_round_trips_through_string(#[case] version: SemVer) {
    let reparsed = SemVer::from_string(&version.to_string()).unwrap();

    assert_eq!(reparsed, version);
    assert_eq!(reparsed.prerelease(), version.prerelease());
    assert_eq!(reparsed.build(), version.build());
    assert_eq!(reparsed.to_string(), version.to_string());
}

#[test]
fn negative_parts_fail_construction() {
    assert!(matches!(
        APIVersion::try_new(-1, 0),
        Err(VersionError::NegativePart { index: 0, value: -1 })
    ));
    assert!(matches!(
        SemVer::try_new(0, 0, -1),
        Err(VersionError::NegativePart { index: 2, value: -1 })
    ));
}

#[test]
fn api_versions_compare_by_major_then_minor() {
    let v1_0 = APIVersion::from_string("1.0").unwrap();
    let v1_1 = APIVersion::from_string("1.1").unwrap();
    let v1_9 = APIVersion::from_string("1.9").unwrap();
    let v2_0 = APIVersion::from_string("2.0").unwrap();

    assert!(v1_0 < v1_1);
    assert!(v2_0 > v1_9);
    assert_eq!(v1_0.cmp(&APIVersion::new(1, 0)), Ordering::Equal);
    assert!(!(v1_0 < APIVersion::new(1, 0)));
    assert!(!(v1_0 > APIVersion::new(1, 0)));
}

#[test]
fn semver_ordering_ignores_metadata() {
    let alpha = SemVer::new(1, 0, 0).with_prerelease("alpha");
    let beta = SemVer::new(1, 0, 0).with_prerelease("beta");

    assert_eq!(alpha, beta);
    assert!(SemVer::new(1, 0, 0) < SemVer::new(1, 0, 1));

    let distinct: HashSet<SemVer> = [alpha, beta].into_iter().collect();
    assert_eq!(distinct.len(), 1);
}

#[rstest]
#[case("1")]
#[case("1.2")]
#[case("1.2.3.4")]
#[case("01.1.1")]
#[case("1.2.3-0123")]
fn semver_rejects_malformed_strings(#[case] input: &str) {
    let err = SemVer::from_string(input).unwrap_err();
    assert!(err.to_string().contains("invalid SemVer string"));
}

#[rstest]
#[case("0.0.0")]
#[case("42")]
#[case("1 0")]
fn api_version_rejects_malformed_strings(#[case] input: &str) {
    let err = APIVersion::from_string(input).unwrap_err();
    assert!(err.to_string().contains("invalid API version string"));
}

#[test]
fn versions_of_different_arity_are_incomparable() {
    let api = APIVersion::new(1, 0);
    let semver = SemVer::new(1, 0, 0);

    assert_eq!(
        api.as_comparable().try_cmp(semver.as_comparable()),
        Err(VersionError::Incomparable { left: 2, right: 3 })
    );
    assert_eq!(
        semver.as_comparable().try_cmp(api.as_comparable()),
        Err(VersionError::Incomparable { left: 3, right: 2 })
    );
}

#[test]
fn comparable_versions_sort_lexicographically() {
    let mut versions = vec![
        ComparableVersion::new([1, 10, 0]),
        ComparableVersion::new([1, 2, 0]),
        ComparableVersion::new([0, 99, 99]),
    ];
    versions.sort();

    assert_eq!(
        versions,
        vec![
            ComparableVersion::new([0, 99, 99]),
            ComparableVersion::new([1, 2, 0]),
            ComparableVersion::new([1, 10, 0]),
        ]
    );
}

#[test]
fn rendering_is_idempotent() {
    let semver = SemVer::from_string("2.0.0-rc.1+build.123").unwrap();
    let api = APIVersion::from_string("3.7").unwrap();

    assert_eq!(semver.to_string(), semver.to_string());
    assert_eq!(api.to_string(), api.to_string());
}

#[test]
fn parse_via_from_str() {
    let semver: SemVer = "1.2.3".parse().unwrap();
    let api: APIVersion = "1.2".parse().unwrap();

    assert_eq!(semver, SemVer::new(1, 2, 3));
    assert_eq!(api, APIVersion::new(1, 2));
}
