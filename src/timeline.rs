// Daily timeline aggregation: bin same-version raw runs by calendar day,
// fill gap days from the version's precomputed aggregate, respect the
// selected time-range cutoff.

use crate::models::{Metric, MetricResult, RawBenchmark, VersionAggregate};
use serde::Serialize;
use std::collections::BTreeMap;

pub const DAY_IN_SECONDS: i64 = 86_400;

/// One point per calendar day of a version's active period. `is_raw` is
/// true when the day had actual runs; false means the value is the
/// version-wide aggregate used as filler, so a run of `is_raw = false`
/// points is not evidence of daily measurement.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    /// Day start, unix milliseconds (chart time axis).
    pub x: i64,
    pub y: f64,
    pub version: String,
    pub samples: u32,
    pub min: f64,
    pub max: f64,
    pub is_dev: bool,
    pub is_raw: bool,
}

/// Timeline range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Days(u32),
    All,
}

impl TimeRange {
    /// Cutoff in unix seconds; points before it are out of range.
    pub fn cutoff(self, now_secs: i64) -> i64 {
        match self {
            TimeRange::Days(days) => now_secs - i64::from(days) * DAY_IN_SECONDS,
            TimeRange::All => 0,
        }
    }
}

/// Floors a unix-seconds timestamp to its day boundary.
pub fn day_floor(ts: i64) -> i64 {
    ts.div_euclid(DAY_IN_SECONDS) * DAY_IN_SECONDS
}

struct LocalAggregate {
    avg: f64,
    min: f64,
    max: f64,
    samples: u32,
}

fn aggregate_raw_values(values: &[f64]) -> Option<LocalAggregate> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(LocalAggregate {
        avg: sum / values.len() as f64,
        min,
        max,
        samples: values.len() as u32,
    })
}

/// Builds the daily series for one version of one operation key.
///
/// The aggregate's active interval is clipped at the start to
/// `cutoff_secs`; a version that ended before the cutoff produces nothing.
/// Every day from the clipped start-day through the end-day gets exactly
/// one point: the local average of that day's same-version raw samples
/// when any exist, otherwise the precomputed aggregate for the version.
pub fn build_daily_points(
    agg: &VersionAggregate,
    result: &MetricResult,
    key: &str,
    raw_benchmarks: &[RawBenchmark],
    metric: Metric,
    cutoff_secs: i64,
) -> Vec<DailyPoint> {
    let Some((first, last)) = agg.interval() else {
        return Vec::new();
    };
    if last < cutoff_secs {
        return Vec::new();
    }
    let clipped_first = first.max(cutoff_secs);
    let fallback = result.stat(metric);

    let mut version_runs: Vec<&RawBenchmark> = raw_benchmarks
        .iter()
        .filter(|b| b.version == agg.version)
        .collect();
    version_runs.sort_by_key(|b| b.time);

    let mut raw_by_day: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for run in version_runs {
        if let Some(value) = run.value(key, metric) {
            raw_by_day.entry(day_floor(run.time)).or_default().push(value);
        }
    }

    let start_day = day_floor(clipped_first);
    let end_day = day_floor(last);
    let mut points = Vec::new();
    let mut day = start_day;
    while day <= end_day {
        let point = match raw_by_day.get(&day).and_then(|v| aggregate_raw_values(v)) {
            Some(local) => DailyPoint {
                x: day * 1000,
                y: local.avg,
                version: agg.version.clone(),
                samples: local.samples,
                min: local.min,
                max: local.max,
                is_dev: agg.dev,
                is_raw: true,
            },
            None => DailyPoint {
                x: day * 1000,
                y: fallback.value,
                version: agg.version.clone(),
                samples: result.samples,
                min: fallback.min,
                max: fallback.max,
                is_dev: agg.dev,
                is_raw: false,
            },
        };
        points.push(point);
        day += DAY_IN_SECONDS;
    }
    points
}
