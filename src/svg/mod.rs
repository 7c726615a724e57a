// Static SVG badge generation (README images, dark + light variants).
// Badges read aggregation resources only and always show the latest stable
// version under the PreferRelease policy, so an untagged pseudo-version
// build never displaces a tagged release on the README.

pub mod streaming;
pub mod table;

use crate::libraries::{LIBRARIES, Library};
use crate::models::MetricResult;
use crate::semver::{SelectOptions, VersionPolicy, select_latest};
use crate::store::{ResultSource, fetch_aggregations};
use std::collections::HashMap;
use tracing::warn;

/// Badge color scheme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Dark,
    Light,
}

/// Latest stable results for one library, ready for badge rendering.
/// Uses the library's SVG-optimized color.
#[derive(Debug, Clone)]
pub struct BadgeLibrary {
    pub library: &'static Library,
    pub version: String,
    pub results: HashMap<String, MetricResult>,
}

/// Loads the latest stable aggregate per library. Libraries whose
/// aggregation resource is missing or malformed, or that have no stable
/// version, are skipped with a warning. Empty result means nothing to
/// render; callers exit non-zero.
pub async fn load_badge_data<S: ResultSource>(source: &S, streaming_only: bool) -> Vec<BadgeLibrary> {
    let mut out = Vec::new();
    for lib in LIBRARIES {
        if streaming_only && !lib.streaming {
            continue;
        }
        let aggregations = match fetch_aggregations(source, lib).await {
            Ok(aggregations) => aggregations,
            Err(e) => {
                warn!(library = lib.name, error = %e, "skipping library");
                continue;
            }
        };
        let latest = select_latest(
            &aggregations,
            SelectOptions {
                include_dev: false,
                policy: VersionPolicy::PreferRelease,
            },
        );
        if let Some(latest) = latest {
            out.push(BadgeLibrary {
                library: lib,
                version: latest.version.clone(),
                results: latest.results.clone(),
            });
        }
    }
    out
}

/// Path of the light-mode variant next to the dark base path:
/// `benchmark-table.svg` -> `benchmark-table-light.svg`.
pub fn light_variant(path: &str) -> String {
    match path.strip_suffix(".svg") {
        Some(base) => format!("{}-light.svg", base),
        None => format!("{}-light.svg", path),
    }
}

/// Generated-at stamp for badge subtitles (UTC, minute precision).
pub fn generated_at() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M").to_string()
}
