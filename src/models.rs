// Domain models (ported from the dashboard's JSON result shapes).
// Validated with serde at the load boundary; malformed records are
// rejected at ingestion instead of checked field-by-field downstream.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Shape of `<library>-aggregation.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregationFile {
    pub aggregations: Vec<VersionAggregate>,
}

/// Shape of `<library>.json` (raw runs).
#[derive(Debug, Clone, Deserialize)]
pub struct RawFile {
    #[serde(default)]
    pub benchmarks: Vec<RawBenchmark>,
}

/// Precomputed per-version summary. `first`/`last` bound the version's
/// observed activity in unix seconds; one-sided records occur when a
/// version was seen in a single aggregation pass.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionAggregate {
    pub version: String,
    #[serde(default)]
    pub dev: bool,
    #[serde(default)]
    pub first: Option<i64>,
    #[serde(default)]
    pub last: Option<i64>,
    pub results: HashMap<String, MetricResult>,
}

impl VersionAggregate {
    /// Active interval `[first, last]`, falling back to whichever bound is
    /// present when the other is absent. `None` when both are missing.
    pub fn interval(&self) -> Option<(i64, i64)> {
        let first = self.first.or(self.last)?;
        let last = self.last.or(self.first)?;
        Some((first, last))
    }
}

/// Summary for one operation key: `[value, min, max]` per metric plus the
/// number of samples behind them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricResult {
    pub ns_op: [f64; 3],
    pub bytes: [f64; 3],
    pub alloc: [f64; 3],
    pub samples: u32,
}

/// value/min/max of one metric, pulled out of a [`MetricResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricStat {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl MetricResult {
    pub fn stat(&self, metric: Metric) -> MetricStat {
        let [value, min, max] = match metric {
            Metric::Time => self.ns_op,
            Metric::Memory => self.bytes,
            Metric::Alloc => self.alloc,
        };
        MetricStat { value, min, max }
    }
}

/// One captured benchmark run. `results` maps operation key to
/// `[ns_per_op, bytes_alloc, num_allocs]`. Source order is not guaranteed;
/// consumers sort by `time` before processing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBenchmark {
    pub time: i64,
    pub version: String,
    #[serde(default)]
    pub dev: bool,
    pub results: HashMap<String, [f64; 3]>,
}

impl RawBenchmark {
    /// Metric field of the per-run triple for `key`, if the run covers it.
    pub fn value(&self, key: &str, metric: Metric) -> Option<f64> {
        self.results.get(key).map(|triple| triple[metric.raw_index()])
    }
}

/// Benchmark metric; indexes the raw triple and selects the aggregate field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Time,
    Memory,
    Alloc,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Time, Metric::Memory, Metric::Alloc];

    /// Index into the raw `[ns_per_op, bytes_alloc, num_allocs]` triple.
    pub fn raw_index(self) -> usize {
        match self {
            Metric::Time => 0,
            Metric::Memory => 1,
            Metric::Alloc => 2,
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            Metric::Time => "Time (ns/op)",
            Metric::Memory => "Memory (bytes/op)",
            Metric::Alloc => "Allocations",
        }
    }
}

/// Base benchmark operation. Streaming variants exist for all but
/// `HashTreeRoot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Unmarshal,
    Marshal,
    HashTreeRoot,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::Unmarshal,
        Operation::Marshal,
        Operation::HashTreeRoot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Unmarshal => "Unmarshal",
            Operation::Marshal => "Marshal",
            Operation::HashTreeRoot => "HashTreeRoot",
        }
    }

    /// Name of the streaming (Reader/Writer) variant, if one exists.
    pub fn stream_name(self) -> Option<&'static str> {
        match self {
            Operation::Unmarshal => Some("UnmarshalReader"),
            Operation::Marshal => Some("MarshalWriter"),
            Operation::HashTreeRoot => None,
        }
    }

    /// Operation key for `mode`; `None` when the mode has no variant here.
    pub fn key(self, mode: Mode, preset: Preset, payload: PayloadKind) -> Option<String> {
        let name = match mode {
            Mode::Buffer => self.name(),
            Mode::Stream => self.stream_name()?,
        };
        Some(operation_key(name, preset, payload))
    }
}

/// Buffer (whole-slice) vs Stream (Reader/Writer) API style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Buffer,
    Stream,
}

/// Consensus preset the payload was generated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Mainnet,
    Minimal,
}

impl Preset {
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Mainnet => "Mainnet",
            Preset::Minimal => "Minimal",
        }
    }
}

/// Benchmarked payload type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    Block,
    State,
}

impl PayloadKind {
    pub const ALL: [PayloadKind; 2] = [PayloadKind::Block, PayloadKind::State];

    pub fn as_str(self) -> &'static str {
        match self {
            PayloadKind::Block => "Block",
            PayloadKind::State => "State",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The composite key indexing `results` maps: operation + preset + payload.
/// Single construction point; never rebuilt ad hoc at call sites.
pub fn operation_key(operation: &str, preset: Preset, payload: PayloadKind) -> String {
    format!("{}{}{}", operation, preset.as_str(), payload.as_str())
}
