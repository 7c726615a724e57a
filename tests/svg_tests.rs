// SVG badge tests: landmarks in the generated documents, light/dark
// variants, version display truncation, and the badge data loader.

mod common;

use benchviz::libraries;
use benchviz::store::FsSource;
use benchviz::svg::{self, BadgeLibrary, Scheme, light_variant};
use common::uniform_result;
use std::collections::HashMap;
use tempfile::TempDir;

fn badge_entry(lib_name: &str, version: &str, keys: &[&str]) -> BadgeLibrary {
    let library = libraries::find(lib_name).unwrap();
    let results: HashMap<String, _> = keys
        .iter()
        .map(|k| (k.to_string(), uniform_result(1500.0, 1400.0, 1600.0, 5)))
        .collect();
    BadgeLibrary {
        library,
        version: version.to_string(),
        results,
    }
}

#[test]
fn table_badge_contains_expected_landmarks() {
    let data = vec![
        badge_entry(
            "fastssz-v1",
            "v1.0.0",
            &["UnmarshalMainnetBlock", "MarshalMainnetBlock"],
        ),
        badge_entry("karalabessz", "v2.1.0", &["UnmarshalMainnetBlock"]),
    ];

    let dark = svg::table::generate(&data, Scheme::Dark);
    assert!(dark.starts_with("<?xml version=\"1.0\""));
    assert!(dark.contains("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(dark.contains("SSZ Benchmark Results"));
    assert!(dark.contains("#0d1117"));
    assert!(dark.contains("FastSSZ v1"));
    assert!(dark.contains("Karalabe SSZ"));
    assert!(dark.contains("v1.0.0"));
    // 1500 ns formats compactly as 2µs
    assert!(dark.contains("2µs"));
    // missing cells render as em-dash
    assert!(dark.contains("—"));
    assert!(dark.ends_with("</svg>"));

    let light = svg::table::generate(&data, Scheme::Light);
    assert!(light.contains("#ffffff"));
    assert!(!light.contains("#0d1117"));
}

#[test]
fn table_badge_truncates_pseudo_versions() {
    let data = vec![badge_entry(
        "fastssz-v1",
        "v0.0.0-20251126100127-abcdef123456",
        &["UnmarshalMainnetBlock"],
    )];
    let out = svg::table::generate(&data, Scheme::Dark);
    assert!(out.contains("v0.0.0-abcdef"));
    assert!(!out.contains("20251126100127"));
}

#[test]
fn streaming_badge_contains_expected_landmarks() {
    let data = vec![
        badge_entry(
            "karalabessz",
            "v1.0.0",
            &["UnmarshalReaderMainnetBlock", "MarshalWriterMainnetBlock"],
        ),
        badge_entry(
            "dynamicssz-codegen",
            "v2.0.0",
            &["UnmarshalReaderMainnetBlock"],
        ),
    ];

    let dark = svg::streaming::generate(&data, Scheme::Dark);
    assert!(dark.starts_with("<?xml version=\"1.0\""));
    assert!(dark.contains("SSZ Streaming Benchmark"));
    assert!(dark.contains("Unmarshal (Stream)"));
    assert!(dark.contains("Marshal (Stream)"));
    // short names label the bars
    assert!(dark.contains("Karalabe"));
    assert!(dark.contains("Dyn Code"));
    assert!(dark.contains("filter=\"url(#glow)\""));
    assert!(dark.ends_with("</svg>"));

    let light = svg::streaming::generate(&data, Scheme::Light);
    assert!(light.contains("#ffffff"));
}

#[test]
fn light_variant_path_derivation() {
    assert_eq!(light_variant("benchmark-table.svg"), "benchmark-table-light.svg");
    assert_eq!(light_variant("out/badge.svg"), "out/badge-light.svg");
    assert_eq!(light_variant("weird"), "weird-light.svg");
}

#[tokio::test]
async fn badge_loader_skips_missing_and_picks_latest_stable() {
    let dir = TempDir::new().unwrap();
    // karalabessz: a stable release plus a newer pseudo-version and a dev
    // build; the badge must show the tagged release.
    std::fs::write(
        dir.path().join("karalabessz-aggregation.json"),
        r#"{
            "aggregations": [
                {"version": "v1.2.0", "results": {}},
                {"version": "v0.0.0-20990101000000-abcdef1", "results": {}},
                {"version": "v9.9.9", "dev": true, "results": {}}
            ]
        }"#,
    )
    .unwrap();

    let source = FsSource::new(dir.path());
    let data = svg::load_badge_data(&source, true).await;
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].library.name, "karalabessz");
    assert_eq!(data[0].version, "v1.2.0");
}

#[tokio::test]
async fn badge_loader_streaming_filter() {
    let dir = TempDir::new().unwrap();
    let body = r#"{"aggregations": [{"version": "v1.0.0", "results": {}}]}"#;
    // one streaming, one buffer-only library
    std::fs::write(dir.path().join("karalabessz-aggregation.json"), body).unwrap();
    std::fs::write(dir.path().join("ztyp-aggregation.json"), body).unwrap();

    let source = FsSource::new(dir.path());
    let all = svg::load_badge_data(&source, false).await;
    assert_eq!(all.len(), 2);

    let streaming = svg::load_badge_data(&source, true).await;
    assert_eq!(streaming.len(), 1);
    assert_eq!(streaming[0].library.name, "karalabessz");
}
