// Model tests: key construction, metric indexing, wire-format parsing.

mod common;

use benchviz::models::{
    Metric, Mode, Operation, PayloadKind, Preset, RawBenchmark, VersionAggregate, operation_key,
};
use common::uniform_result;

#[test]
fn operation_key_composition() {
    assert_eq!(
        operation_key("Unmarshal", Preset::Mainnet, PayloadKind::Block),
        "UnmarshalMainnetBlock"
    );
    assert_eq!(
        operation_key("MarshalWriter", Preset::Minimal, PayloadKind::State),
        "MarshalWriterMinimalState"
    );
}

#[test]
fn operation_mode_keys() {
    assert_eq!(
        Operation::Marshal.key(Mode::Buffer, Preset::Mainnet, PayloadKind::Block),
        Some("MarshalMainnetBlock".to_string())
    );
    assert_eq!(
        Operation::Marshal.key(Mode::Stream, Preset::Mainnet, PayloadKind::Block),
        Some("MarshalWriterMainnetBlock".to_string())
    );
    assert_eq!(
        Operation::HashTreeRoot.key(Mode::Stream, Preset::Mainnet, PayloadKind::Block),
        None
    );
}

#[test]
fn metric_raw_index_matches_triple_layout() {
    assert_eq!(Metric::Time.raw_index(), 0);
    assert_eq!(Metric::Memory.raw_index(), 1);
    assert_eq!(Metric::Alloc.raw_index(), 2);
}

#[test]
fn metric_axis_labels() {
    assert_eq!(Metric::Time.axis_label(), "Time (ns/op)");
    assert_eq!(Metric::Memory.axis_label(), "Memory (bytes/op)");
    assert_eq!(Metric::Alloc.axis_label(), "Allocations");
}

#[test]
fn metric_result_stat_selects_field() {
    let result = benchviz::models::MetricResult {
        ns_op: [1.0, 2.0, 3.0],
        bytes: [4.0, 5.0, 6.0],
        alloc: [7.0, 8.0, 9.0],
        samples: 1,
    };
    let stat = result.stat(Metric::Memory);
    assert_eq!((stat.value, stat.min, stat.max), (4.0, 5.0, 6.0));
}

#[test]
fn raw_benchmark_value_lookup() {
    let run: RawBenchmark = serde_json::from_str(
        r#"{"time": 100, "version": "v1.0.0", "results": {"UnmarshalMainnetBlock": [1.0, 2.0, 3.0]}}"#,
    )
    .unwrap();
    assert_eq!(run.value("UnmarshalMainnetBlock", Metric::Alloc), Some(3.0));
    assert_eq!(run.value("MissingKey", Metric::Time), None);
    assert!(!run.dev);
}

#[test]
fn aggregate_interval_fallbacks() {
    let mut agg: VersionAggregate =
        serde_json::from_str(r#"{"version": "v1.0.0", "results": {}}"#).unwrap();
    assert_eq!(agg.interval(), None);

    agg.first = Some(10);
    assert_eq!(agg.interval(), Some((10, 10)));

    agg.last = Some(20);
    assert_eq!(agg.interval(), Some((10, 20)));

    agg.first = None;
    assert_eq!(agg.interval(), Some((20, 20)));
}

#[test]
fn metric_result_rejects_wrong_arity() {
    let bad = r#"{"ns_op": [1.0, 2.0], "bytes": [1.0, 2.0, 3.0], "alloc": [1.0, 2.0, 3.0], "samples": 1}"#;
    assert!(serde_json::from_str::<benchviz::models::MetricResult>(bad).is_err());

    let good = uniform_result(1.0, 2.0, 3.0, 1);
    let json = serde_json::to_string(&good).unwrap();
    assert!(serde_json::from_str::<benchviz::models::MetricResult>(&json).is_ok());
}
