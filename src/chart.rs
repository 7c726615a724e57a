// Chart projection: turns the store + view state into the label/series
// shapes the rendering collaborator consumes. Pure functions; every call
// recomputes from scratch. Raw numeric values flow into datasets —
// formatting happens only in tooltip/label strings.

use crate::libraries::LIBRARIES;
use crate::models::{Metric, Mode, Operation, operation_key};
use crate::semver::{SelectOptions, VersionPolicy, select_latest};
use crate::store::ResultStore;
use crate::timeline::{DailyPoint, build_daily_points};
use crate::view::ViewState;
use serde::Serialize;

/// Additive per-channel brightening applied to stream-mode series when
/// buffer and stream are displayed together.
const STREAM_BRIGHTEN: u8 = 40;

/// CSS `rgba(...)` string from an RGB triple.
pub fn rgba(color: [u8; 3], alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", color[0], color[1], color[2], alpha)
}

/// Shade for the `index`-th of `total` versions of a library: older
/// versions are lightened progressively toward white.
pub fn version_color(base: [u8; 3], index: usize, total: usize) -> [u8; 3] {
    let fraction = index as f64 / (total as f64 + 1.0) * 0.5;
    base.map(|c| (f64::from(c) + (255.0 - f64::from(c)) * fraction).round() as u8)
}

/// Lightened shade for dev-build series on the run-history view.
pub fn dev_color(base: [u8; 3]) -> [u8; 3] {
    base.map(|c| (f64::from(c) + (255.0 - f64::from(c)) * 0.4).round() as u8)
}

/// Brightens each channel additively, clamped at 255.
pub fn brighten(color: [u8; 3], delta: u8) -> [u8; 3] {
    color.map(|c| c.saturating_add(delta))
}

/// Tooltip metadata riding alongside one bar.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarMeta {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub samples: u32,
    pub version: String,
    pub mode: Mode,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
    pub metadata: Vec<BarMeta>,
}

/// Snapshot (bar) chart payload: one bar per (selected library, active mode).
#[derive(Debug, Clone, Serialize)]
pub struct BarChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

/// Which modes are actually drawn for an operation: stream only exists for
/// operations with a streaming variant, and buffer is forced on when it
/// doesn't, so the chart is never empty for a mode-only selection.
fn active_modes(state: &ViewState, operation: Operation) -> (bool, bool, bool) {
    let has_stream = operation.stream_name().is_some();
    let show_buffer = state.modes.buffer || !has_stream;
    let show_stream = state.modes.stream && has_stream;
    (show_buffer, show_stream, show_buffer && show_stream)
}

/// Projects the latest-version snapshot for one operation and metric.
pub fn snapshot_chart_data(
    state: &ViewState,
    store: &ResultStore,
    operation: Operation,
    metric: Metric,
) -> BarChartData {
    let buffer_key = operation_key(operation.name(), state.preset, state.payload);
    let stream_key = operation
        .stream_name()
        .map(|name| operation_key(name, state.preset, state.payload));
    let (show_buffer, show_stream, show_both) = active_modes(state, operation);

    let mut labels = Vec::new();
    let mut data = Vec::new();
    let mut background_color = Vec::new();
    let mut border_color = Vec::new();
    let mut metadata = Vec::new();

    for lib in LIBRARIES {
        if !state.is_selected(lib.name) {
            continue;
        }
        let Some(lib_data) = store.get(lib.name) else {
            continue;
        };
        let Some(latest) = select_latest(
            &lib_data.aggregations,
            SelectOptions {
                include_dev: false,
                policy: VersionPolicy::Lenient,
            },
        ) else {
            continue;
        };

        if show_buffer {
            if let Some(result) = latest.results.get(&buffer_key) {
                let label = if show_both {
                    format!("{} (Buf)", lib.display_name)
                } else {
                    lib.display_name.to_string()
                };
                let stat = result.stat(metric);
                labels.push(label);
                data.push(stat.value);
                background_color.push(rgba(lib.base_color, 0.8));
                border_color.push(rgba(lib.base_color, 1.0));
                metadata.push(BarMeta {
                    value: stat.value,
                    min: stat.min,
                    max: stat.max,
                    samples: result.samples,
                    version: latest.version.clone(),
                    mode: Mode::Buffer,
                });
            }
        }

        if show_stream && lib.streaming {
            if let Some(result) = stream_key.as_ref().and_then(|k| latest.results.get(k)) {
                let label = if show_both {
                    format!("{} (Str)", lib.display_name)
                } else {
                    lib.display_name.to_string()
                };
                let color = if show_both {
                    brighten(lib.base_color, STREAM_BRIGHTEN)
                } else {
                    lib.base_color
                };
                let stat = result.stat(metric);
                labels.push(label);
                data.push(stat.value);
                background_color.push(rgba(color, 0.8));
                border_color.push(rgba(color, 1.0));
                metadata.push(BarMeta {
                    value: stat.value,
                    min: stat.min,
                    max: stat.max,
                    samples: result.samples,
                    version: latest.version.clone(),
                    mode: Mode::Stream,
                });
            }
        }
    }

    BarChartData {
        labels,
        datasets: vec![BarDataset {
            data,
            background_color,
            border_color,
            border_width: 1,
            metadata,
        }],
    }
}

/// One line series: a version of a library in one mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDataset {
    pub label: String,
    pub data: Vec<DailyPoint>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
    pub point_radius: u32,
    pub point_hover_radius: u32,
    pub border_width: u32,
    pub border_dash: Vec<u32>,
    pub is_dev: bool,
    pub is_stream: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineChartData {
    pub datasets: Vec<TimelineDataset>,
}

/// Projects the daily time-series for the timeline view. `now_secs` anchors
/// the range cutoff so the projection stays a pure function of its inputs.
pub fn timeline_chart_data(
    state: &ViewState,
    store: &ResultStore,
    now_secs: i64,
) -> TimelineChartData {
    let operation = state.timeline_operation;
    let buffer_key = operation_key(operation.name(), state.preset, state.payload);
    let stream_key = operation
        .stream_name()
        .map(|name| operation_key(name, state.preset, state.payload));
    let (show_buffer, show_stream, show_both) = active_modes(state, operation);
    let cutoff = state.timeline_range.cutoff(now_secs);

    let mut datasets = Vec::new();

    for lib in LIBRARIES {
        if !state.is_selected(lib.name) {
            continue;
        }
        let Some(lib_data) = store.get(lib.name) else {
            continue;
        };

        let mut keys: Vec<(&str, bool)> = Vec::new();
        if show_buffer {
            keys.push((buffer_key.as_str(), false));
        }
        if show_stream && lib.streaming {
            if let Some(key) = stream_key.as_deref() {
                keys.push((key, true));
            }
        }

        for (key, is_stream) in keys {
            let mut versions: Vec<_> = lib_data
                .aggregations
                .iter()
                .filter(|agg| {
                    agg.results.contains_key(key) && (state.show_dev_versions || !agg.dev)
                })
                .collect();
            versions.sort_by_key(|agg| agg.first.unwrap_or(0));
            let total = versions.len();

            for (index, agg) in versions.iter().enumerate() {
                let Some(result) = agg.results.get(key) else {
                    continue;
                };
                let points = build_daily_points(
                    agg,
                    result,
                    key,
                    &lib_data.raw_benchmarks,
                    state.timeline_metric,
                    cutoff,
                );
                if points.is_empty() {
                    continue;
                }

                let mut color = version_color(lib.base_color, index, total);
                if is_stream && show_both {
                    color = brighten(color, STREAM_BRIGHTEN);
                }
                let mode_label = if show_both {
                    if is_stream { " (Str)" } else { " (Buf)" }
                } else {
                    ""
                };

                datasets.push(TimelineDataset {
                    label: format!("{}{} {}", lib.display_name, mode_label, agg.version),
                    data: points,
                    border_color: rgba(color, 1.0),
                    background_color: rgba(color, 0.3),
                    fill: false,
                    tension: 0.0,
                    point_radius: 4,
                    point_hover_radius: 7,
                    border_width: 2,
                    border_dash: if agg.dev { vec![5, 5] } else { Vec::new() },
                    is_dev: agg.dev,
                    is_stream,
                });
            }
        }
    }

    TimelineChartData { datasets }
}

/// One raw run on the run-history (details) view. Carries the full triple
/// so the tooltip can show all three metrics for the run.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunPoint {
    /// Run time, unix milliseconds.
    pub x: i64,
    pub y: f64,
    pub time: i64,
    pub version: String,
    pub dev: bool,
    pub ns_op: f64,
    pub bytes: f64,
    pub alloc: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunHistoryDataset {
    pub label: String,
    pub data: Vec<RunPoint>,
    pub border_color: String,
    pub background_color: String,
    pub border_dash: Vec<u32>,
    pub is_dev: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunHistoryChartData {
    pub datasets: Vec<RunHistoryDataset>,
}

/// Projects individual raw runs over time for the details view. Stable and
/// dev runs become separate series per (library, operation key); dev series
/// only appear when requested and render lightened and dashed.
pub fn run_history_data(
    store: &ResultStore,
    library_filter: Option<&str>,
    keys: &[String],
    metric: Metric,
    show_dev: bool,
) -> RunHistoryChartData {
    let mut datasets = Vec::new();

    for lib in LIBRARIES {
        if library_filter.is_some_and(|name| name != lib.name) {
            continue;
        }
        let Some(lib_data) = store.get(lib.name) else {
            continue;
        };

        let mut runs: Vec<_> = lib_data.raw_benchmarks.iter().collect();
        runs.sort_by_key(|b| b.time);

        for key in keys {
            let mut stable = Vec::new();
            let mut dev = Vec::new();
            for run in &runs {
                let Some(triple) = run.results.get(key) else {
                    continue;
                };
                let point = RunPoint {
                    x: run.time * 1000,
                    y: triple[metric.raw_index()],
                    time: run.time,
                    version: run.version.clone(),
                    dev: run.dev,
                    ns_op: triple[0],
                    bytes: triple[1],
                    alloc: triple[2],
                };
                if run.dev {
                    dev.push(point);
                } else {
                    stable.push(point);
                }
            }

            if !stable.is_empty() {
                datasets.push(RunHistoryDataset {
                    label: format!("{} - {}", lib.display_name, key),
                    data: stable,
                    border_color: rgba(lib.base_color, 1.0),
                    background_color: rgba(lib.base_color, 0.2),
                    border_dash: Vec::new(),
                    is_dev: false,
                });
            }
            if show_dev && !dev.is_empty() {
                let color = dev_color(lib.base_color);
                datasets.push(RunHistoryDataset {
                    label: format!("{} - {} (dev)", lib.display_name, key),
                    data: dev,
                    border_color: rgba(color, 1.0),
                    background_color: rgba(color, 0.2),
                    border_dash: vec![5, 5],
                    is_dev: true,
                });
            }
        }
    }

    RunHistoryChartData { datasets }
}
