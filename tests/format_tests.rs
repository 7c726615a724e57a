// Display formatting tests

use benchviz::format::{
    format_bytes, format_count, format_memory_compact, format_metric, format_time_compact,
    format_version,
};
use benchviz::models::Metric;

#[test]
fn metric_formatting_scales_units() {
    assert_eq!(format_metric(512.0, Metric::Time), "512.00 ns");
    assert_eq!(format_metric(1_500.0, Metric::Time), "1.50 us");
    assert_eq!(format_metric(2_500_000.0, Metric::Time), "2.50 ms");
    assert_eq!(format_metric(3_000_000_000.0, Metric::Time), "3.00 s");

    assert_eq!(format_metric(512.0, Metric::Memory), "512.00 B");
    assert_eq!(format_metric(2_048.0, Metric::Memory), "2.05 KB");
    assert_eq!(format_metric(42.0, Metric::Alloc), "42.00");
}

#[test]
fn byte_formatting() {
    assert_eq!(format_bytes(129_952.0), "129.95 KB");
    assert_eq!(format_bytes(16_784_725.0), "16.78 MB");
}

#[test]
fn count_formatting() {
    assert_eq!(format_count(950.0), "950.00");
    assert_eq!(format_count(1_500.0), "1.50 K");
    assert_eq!(format_count(2_500_000.0), "2.50 M");
}

#[test]
fn compact_formatting_for_badges() {
    assert_eq!(format_time_compact(850.0), "850ns");
    assert_eq!(format_time_compact(1_500.0), "2µs");
    assert_eq!(format_time_compact(2_500_000.0), "2.5ms");
    assert_eq!(format_time_compact(1_200_000_000.0), "1.2s");

    assert_eq!(format_memory_compact(850.0), "850B");
    assert_eq!(format_memory_compact(131_072.0), "131KB");
    assert_eq!(format_memory_compact(1_500_000.0), "1.5MB");
}

#[test]
fn pseudo_versions_truncate_for_display() {
    assert_eq!(
        format_version("v0.0.0-20251126100127-abcdef123456"),
        "v0.0.0-abcdef"
    );
    // short hashes keep what they have
    assert_eq!(format_version("v0.0.0-20251126100127-abc1"), "v0.0.0-abc1");
    // everything else passes through
    assert_eq!(format_version("v1.2.3"), "v1.2.3");
    assert_eq!(format_version("v1.2.3-beta"), "v1.2.3-beta");
}
