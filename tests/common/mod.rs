// Shared test helpers

use benchviz::models::{MetricResult, RawBenchmark, VersionAggregate};
use std::collections::HashMap;

/// MetricResult with the same value/min/max triple for all three metrics.
pub fn uniform_result(value: f64, min: f64, max: f64, samples: u32) -> MetricResult {
    MetricResult {
        ns_op: [value, min, max],
        bytes: [value, min, max],
        alloc: [value, min, max],
        samples,
    }
}

pub fn aggregate(
    version: &str,
    dev: bool,
    first: Option<i64>,
    last: Option<i64>,
    results: &[(&str, MetricResult)],
) -> VersionAggregate {
    VersionAggregate {
        version: version.to_string(),
        dev,
        first,
        last,
        results: results
            .iter()
            .map(|(k, r)| (k.to_string(), r.clone()))
            .collect(),
    }
}

pub fn raw_run(time: i64, version: &str, dev: bool, results: &[(&str, [f64; 3])]) -> RawBenchmark {
    RawBenchmark {
        time,
        version: version.to_string(),
        dev,
        results: results.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
    }
}

/// Aggregate with no interval bounds and no results (selection tests).
pub fn bare_aggregate(version: &str, dev: bool) -> VersionAggregate {
    VersionAggregate {
        version: version.to_string(),
        dev,
        first: None,
        last: None,
        results: HashMap::new(),
    }
}
