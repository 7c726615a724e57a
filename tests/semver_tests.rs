// Comparator and version-selection tests: ordering properties, pseudo-version
// handling, policy differences, dev filtering.

mod common;

use benchviz::semver::{
    SelectOptions, VersionPolicy, compare, compare_versions, is_pseudo_version, parse,
    pseudo_timestamp, select_latest,
};
use common::bare_aggregate;
use std::cmp::Ordering;

#[test]
fn parse_plain_semver() {
    let v = parse("v1.2.3").unwrap();
    assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
    assert_eq!(v.prerelease, None);
    assert_eq!(v.timestamp, None);
}

#[test]
fn parse_without_v_prefix() {
    assert!(parse("1.2.3").is_some());
}

#[test]
fn parse_prerelease() {
    let v = parse("v1.2.3-beta").unwrap();
    assert_eq!(v.prerelease.as_deref(), Some("beta"));
    assert_eq!(v.timestamp, None);
}

#[test]
fn parse_pseudo_timestamp_prerelease() {
    let v = parse("v0.0.0-20251126100127").unwrap();
    assert_eq!(v.timestamp, Some(20_251_126_100_127));
}

#[test]
fn parse_rejects_garbage() {
    assert!(parse("").is_none());
    assert!(parse("v1.2").is_none());
    assert!(parse("v1.2.3.4").is_none());
    assert!(parse("not-a-version").is_none());
    assert!(parse("v1.2.x").is_none());
    assert!(parse("v1.2.3-").is_none());
}

#[test]
fn compare_none_sorts_below_any() {
    let v = parse("v0.0.1");
    assert_eq!(compare(None, v.as_ref()), Ordering::Less);
    assert_eq!(compare(v.as_ref(), None), Ordering::Greater);
    assert_eq!(compare(None, None), Ordering::Equal);
}

#[test]
fn compare_release_beats_prerelease() {
    let release = parse("v1.2.3");
    let pre = parse("v1.2.3-beta");
    assert_eq!(compare(release.as_ref(), pre.as_ref()), Ordering::Greater);
}

#[test]
fn compare_prereleases_lexicographically() {
    let beta = parse("v1.2.3-beta");
    let rc = parse("v1.2.3-rc");
    assert_eq!(compare(beta.as_ref(), rc.as_ref()), Ordering::Less);
}

#[test]
fn compare_timestamp_beats_named_prerelease() {
    let ts = parse("v0.0.0-20250101000000");
    let named = parse("v0.0.0-beta");
    assert_eq!(compare(ts.as_ref(), named.as_ref()), Ordering::Greater);
}

#[test]
fn pseudo_versions_order_by_timestamp() {
    assert_eq!(
        compare_versions(
            "v0.0.0-20250101000000-abcdef1",
            "v0.0.0-20250201000000-1234567",
            VersionPolicy::Lenient,
        ),
        Ordering::Less
    );
    assert_eq!(
        compare_versions(
            "v0.0.0-20250101000000-abcdef1",
            "v0.0.0-20250201000000-1234567",
            VersionPolicy::PreferRelease,
        ),
        Ordering::Less
    );
}

#[test]
fn antisymmetry_over_all_pairs() {
    let versions = [
        "v1.0.0",
        "v1.0.1",
        "v2.0.0",
        "v1.2.3-beta",
        "v1.2.3-rc",
        "v1.2.3",
        "v0.0.0-20250101000000-abcdef1",
        "v0.0.0-20250201000000-1234567",
        "garbage",
    ];
    for a in &versions {
        for b in &versions {
            for policy in [VersionPolicy::Lenient, VersionPolicy::PreferRelease] {
                assert_eq!(
                    compare_versions(a, b, policy),
                    compare_versions(b, a, policy).reverse(),
                    "antisymmetry violated for {a} vs {b} under {policy:?}"
                );
            }
        }
    }
}

#[test]
fn transitivity_over_sorted_set() {
    let mut versions = vec![
        "v2.0.0",
        "v1.0.0",
        "v1.2.3",
        "v1.2.3-rc",
        "v1.2.3-beta",
        "v0.0.0-20250201000000-1234567",
        "v0.0.0-20250101000000-abcdef1",
        "v0.9.9",
    ];
    for policy in [VersionPolicy::Lenient, VersionPolicy::PreferRelease] {
        versions.sort_by(|a, b| compare_versions(a, b, policy));
        for i in 0..versions.len() {
            for j in i..versions.len() {
                assert_ne!(
                    compare_versions(versions[i], versions[j], policy),
                    Ordering::Greater,
                    "sorted order inconsistent at {} vs {} under {policy:?}",
                    versions[i],
                    versions[j]
                );
            }
        }
    }
}

#[test]
fn pseudo_version_detection() {
    assert!(is_pseudo_version("v0.0.0-20251126100127-abcdef123456"));
    assert_eq!(
        pseudo_timestamp("v0.0.0-20251126100127-abcdef123456"),
        Some(20_251_126_100_127)
    );
    // wrong base version, bad hash, missing hash
    assert!(!is_pseudo_version("v1.0.0-20251126100127-abcdef1"));
    assert!(!is_pseudo_version("v0.0.0-20251126100127-XYZ"));
    assert!(!is_pseudo_version("v0.0.0-20251126100127"));
    assert!(!is_pseudo_version("v1.2.3"));
}

#[test]
fn lenient_vs_strict_on_mixed_sets() {
    // A pseudo-version build is numerically v0.0.0 so a tagged release wins
    // under both policies.
    let release = "v1.0.0";
    let pseudo = "v0.0.0-20990101000000-abcdef1";
    for policy in [VersionPolicy::Lenient, VersionPolicy::PreferRelease] {
        assert_eq!(
            compare_versions(release, pseudo, policy),
            Ordering::Greater,
            "{policy:?}"
        );
    }

    // Divergence: at equal numbers, lenient compares the pseudo suffix as a
    // plain prerelease string, strict categorically prefers the release.
    let odd_prerelease = "v0.0.0-11111111";
    assert_eq!(
        compare_versions(pseudo, odd_prerelease, VersionPolicy::Lenient),
        Ordering::Greater
    );
    assert_eq!(
        compare_versions(pseudo, odd_prerelease, VersionPolicy::PreferRelease),
        Ordering::Less
    );
}

#[test]
fn select_latest_filters_dev_by_default() {
    let aggregates = vec![
        bare_aggregate("v1.0.0", false),
        bare_aggregate("v1.1.0", true),
    ];
    let latest = select_latest(&aggregates, SelectOptions::default()).unwrap();
    assert_eq!(latest.version, "v1.0.0");

    let latest = select_latest(
        &aggregates,
        SelectOptions {
            include_dev: true,
            policy: VersionPolicy::Lenient,
        },
    )
    .unwrap();
    assert_eq!(latest.version, "v1.1.0");
}

#[test]
fn select_latest_none_when_all_dev() {
    let aggregates = vec![bare_aggregate("v1.0.0", true)];
    assert!(select_latest(&aggregates, SelectOptions::default()).is_none());
}

#[test]
fn select_latest_none_when_nothing_parses() {
    let aggregates = vec![bare_aggregate("nightly", false), bare_aggregate("", false)];
    assert!(select_latest(&aggregates, SelectOptions::default()).is_none());
}

#[test]
fn select_latest_strict_prefers_release_over_newer_pseudo() {
    let aggregates = vec![
        bare_aggregate("v0.0.0-20990101000000-abcdef1", false),
        bare_aggregate("v0.1.0", false),
    ];
    let strict = select_latest(
        &aggregates,
        SelectOptions {
            include_dev: false,
            policy: VersionPolicy::PreferRelease,
        },
    )
    .unwrap();
    assert_eq!(strict.version, "v0.1.0");

    // Lenient ranks by numbers, so the tagged v0.1.0 still wins here; the
    // pseudo build only leads a lenient set when no higher release exists.
    let lenient = select_latest(&aggregates, SelectOptions::default()).unwrap();
    assert_eq!(lenient.version, "v0.1.0");
}

#[test]
fn select_latest_strict_falls_back_to_newest_pseudo() {
    let aggregates = vec![
        bare_aggregate("v0.0.0-20250101000000-abcdef1", false),
        bare_aggregate("v0.0.0-20250201000000-1234567", false),
    ];
    let latest = select_latest(
        &aggregates,
        SelectOptions {
            include_dev: false,
            policy: VersionPolicy::PreferRelease,
        },
    )
    .unwrap();
    assert_eq!(latest.version, "v0.0.0-20250201000000-1234567");
}
