// Human-readable formatting for tooltips, axis ticks, and SVG labels.
// Display strings never feed back into chart data; raw numbers do.

use crate::models::Metric;

/// Tooltip/axis formatting for a metric value (two decimals, spaced units).
pub fn format_metric(value: f64, metric: Metric) -> String {
    match metric {
        Metric::Time => {
            if value >= 1e9 {
                format!("{:.2} s", value / 1e9)
            } else if value >= 1e6 {
                format!("{:.2} ms", value / 1e6)
            } else if value >= 1e3 {
                format!("{:.2} us", value / 1e3)
            } else {
                format!("{:.2} ns", value)
            }
        }
        Metric::Memory => format_bytes(value),
        Metric::Alloc => format!("{:.2}", value),
    }
}

/// Byte counts with spaced units (dashboard metadata and tooltips).
pub fn format_bytes(bytes: f64) -> String {
    if bytes >= 1e9 {
        format!("{:.2} GB", bytes / 1e9)
    } else if bytes >= 1e6 {
        format!("{:.2} MB", bytes / 1e6)
    } else if bytes >= 1e3 {
        format!("{:.2} KB", bytes / 1e3)
    } else {
        format!("{:.2} B", bytes)
    }
}

/// Plain magnitude formatting (allocation counts on the details view).
pub fn format_count(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2} G", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2} M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.2} K", value / 1e3)
    } else {
        format!("{:.2}", value)
    }
}

/// Compact duration for SVG badges (unspaced, at most one decimal).
pub fn format_time_compact(ns: f64) -> String {
    if ns >= 1e9 {
        format!("{:.1}s", ns / 1e9)
    } else if ns >= 1e6 {
        format!("{:.1}ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.0}µs", ns / 1e3)
    } else {
        format!("{:.0}ns", ns)
    }
}

/// Compact byte count for SVG badges.
pub fn format_memory_compact(bytes: f64) -> String {
    if bytes >= 1e9 {
        format!("{:.1}GB", bytes / 1e9)
    } else if bytes >= 1e6 {
        format!("{:.1}MB", bytes / 1e6)
    } else if bytes >= 1e3 {
        format!("{:.0}KB", bytes / 1e3)
    } else {
        format!("{:.0}B", bytes)
    }
}

/// Shortens pseudo-versions for display:
/// `v0.0.0-20251126100127-abcdef123456` becomes `v0.0.0-abcdef`.
/// Anything else passes through unchanged.
pub fn format_version(version: &str) -> String {
    if crate::semver::is_pseudo_version(version) {
        if let Some((prefix, rest)) = version.split_once('-') {
            if let Some((_, hash)) = rest.split_once('-') {
                let short = &hash[..hash.len().min(6)];
                return format!("{}-{}", prefix, short);
            }
        }
    }
    version.to_string()
}
