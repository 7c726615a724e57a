// Version parsing, comparison, and latest-version selection.
// Handles Go module pseudo-versions (v0.0.0-YYYYMMDDHHMMSS-hash) alongside
// plain semver. One comparator, parameterized by policy: the dashboard uses
// Lenient, the SVG badge path uses PreferRelease.

use crate::models::VersionAggregate;
use std::cmp::Ordering;

/// Parsed `vMAJOR.MINOR.PATCH[-PRERELEASE]`. A prerelease of exactly 14
/// digits is a pseudo-version build timestamp and carries `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
    pub timestamp: Option<u64>,
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_number(s: &str) -> Option<u64> {
    if !all_digits(s) {
        return None;
    }
    s.parse().ok()
}

/// Parses a version string; `None` for anything that doesn't match
/// `v?MAJOR.MINOR.PATCH[-PRERELEASE]`. Callers treat `None` as sorting
/// below any parseable version, never as an error.
pub fn parse(version: &str) -> Option<ParsedVersion> {
    let rest = version.strip_prefix('v').unwrap_or(version);
    let (numbers, prerelease) = match rest.split_once('-') {
        Some((_, "")) => return None,
        Some((numbers, pre)) => (numbers, Some(pre)),
        None => (rest, None),
    };

    let mut parts = numbers.split('.');
    let major = parse_number(parts.next()?)?;
    let minor = parse_number(parts.next()?)?;
    let patch = parse_number(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    let timestamp = prerelease
        .filter(|pre| pre.len() == 14 && all_digits(pre))
        .and_then(|pre| pre.parse().ok());

    Some(ParsedVersion {
        major,
        minor,
        patch,
        prerelease: prerelease.map(str::to_owned),
        timestamp,
    })
}

/// Total order over optional parsed versions. Missing sorts below present;
/// a release without prerelease sorts above one with; among prereleases,
/// 14-digit build timestamps compare numerically and beat non-timestamp
/// suffixes (pseudo builds are the newest code), everything else compares
/// byte-wise.
pub fn compare(a: Option<&ParsedVersion>, b: Option<&ParsedVersion>) -> Ordering {
    let (a, b) = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Less,
        (Some(_), None) => return Ordering::Greater,
        (Some(a), Some(b)) => (a, b),
    };

    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| match (&a.prerelease, &b.prerelease) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(pa), Some(pb)) => match (a.timestamp, b.timestamp) {
                (Some(ta), Some(tb)) => ta.cmp(&tb),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => pa.cmp(pb),
            },
        })
}

/// Embedded build timestamp of a pseudo-version
/// (`v0.0.0-<14 digits>-<lowercase hex>`), `None` for anything else.
pub fn pseudo_timestamp(version: &str) -> Option<u64> {
    let rest = version.strip_prefix("v0.0.0-")?;
    let (ts, hash) = rest.split_once('-')?;
    if ts.len() != 14 || !all_digits(ts) {
        return None;
    }
    if hash.is_empty() || !hash.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return None;
    }
    ts.parse().ok()
}

pub fn is_pseudo_version(version: &str) -> bool {
    pseudo_timestamp(version).is_some()
}

/// Comparison policy.
///
/// `Lenient` ranks purely by the parsed comparison above; a pseudo-version's
/// numeric prefix (v0.0.0) keeps it below any tagged release naturally, but
/// nothing categorical separates the two. `PreferRelease` ranks tagged
/// releases above ALL pseudo-versions regardless of numbers, and orders
/// pseudo-versions among themselves by embedded timestamp; used by the
/// badge generators so an untagged build never displaces a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    #[default]
    Lenient,
    PreferRelease,
}

/// Compares two raw version strings under `policy`. Strings that neither
/// parse nor classify as pseudo-versions sort below everything else and
/// compare equal to each other.
pub fn compare_versions(a: &str, b: &str, policy: VersionPolicy) -> Ordering {
    match policy {
        VersionPolicy::Lenient => compare(parse(a).as_ref(), parse(b).as_ref()),
        VersionPolicy::PreferRelease => {
            let rank = |v: &str| {
                if is_pseudo_version(v) {
                    1
                } else if parse(v).is_some() {
                    2
                } else {
                    0
                }
            };
            rank(a).cmp(&rank(b)).then_with(|| match rank(a) {
                2 => compare(parse(a).as_ref(), parse(b).as_ref()),
                1 => pseudo_timestamp(a).cmp(&pseudo_timestamp(b)),
                _ => Ordering::Equal,
            })
        }
    }
}

/// Options for [`select_latest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectOptions {
    pub include_dev: bool,
    pub policy: VersionPolicy,
}

/// Picks the latest aggregate under the policy comparator. Dev entries are
/// skipped unless included; entries whose version neither parses nor
/// classifies as a pseudo-version can never win. `None` when no candidate
/// remains. Ties keep the earliest entry.
pub fn select_latest<'a>(
    aggregates: &'a [VersionAggregate],
    options: SelectOptions,
) -> Option<&'a VersionAggregate> {
    let mut latest: Option<&VersionAggregate> = None;
    for agg in aggregates {
        if agg.dev && !options.include_dev {
            continue;
        }
        if parse(&agg.version).is_none() && !is_pseudo_version(&agg.version) {
            continue;
        }
        latest = match latest {
            None => Some(agg),
            Some(current) => {
                if compare_versions(&agg.version, &current.version, options.policy)
                    == Ordering::Greater
                {
                    Some(agg)
                } else {
                    Some(current)
                }
            }
        };
    }
    latest
}
