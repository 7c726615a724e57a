// Immutable dashboard selection state. UI handlers build a new ViewState
// and re-run the pure projections in chart.rs; nothing here mutates.

use crate::libraries::LIBRARIES;
use crate::models::{Metric, Operation, PayloadKind, Preset};
use crate::timeline::TimeRange;
use std::collections::BTreeSet;

/// Buffer/Stream display selection. At least one mode is always active;
/// constructors fall back to buffer-only rather than allow an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSelection {
    pub buffer: bool,
    pub stream: bool,
}

impl ModeSelection {
    pub fn new(buffer: bool, stream: bool) -> Self {
        if !buffer && !stream {
            return Self::buffer_only();
        }
        Self { buffer, stream }
    }

    pub fn buffer_only() -> Self {
        Self {
            buffer: true,
            stream: false,
        }
    }

    pub fn both() -> Self {
        Self {
            buffer: true,
            stream: true,
        }
    }
}

/// Everything the user has selected: preset tab, payload type, library set,
/// modes, and the timeline controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub preset: Preset,
    pub payload: PayloadKind,
    pub libraries: BTreeSet<String>,
    pub modes: ModeSelection,
    pub timeline_operation: Operation,
    pub timeline_metric: Metric,
    pub timeline_range: TimeRange,
    pub show_dev_versions: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            preset: Preset::Mainnet,
            payload: PayloadKind::Block,
            libraries: LIBRARIES
                .iter()
                .filter(|l| l.default_selected)
                .map(|l| l.name.to_string())
                .collect(),
            modes: ModeSelection::buffer_only(),
            timeline_operation: Operation::Unmarshal,
            timeline_metric: Metric::Time,
            timeline_range: TimeRange::Days(30),
            show_dev_versions: false,
        }
    }
}

impl ViewState {
    pub fn is_selected(&self, library_name: &str) -> bool {
        self.libraries.contains(library_name)
    }
}
