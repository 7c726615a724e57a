// Library registry: fixed set of benchmarked SSZ libraries and payload metadata.
// Declaration order is display order everywhere.

use crate::models::{PayloadKind, Preset};

/// One benchmarked library. `base_color` is used on the dashboard charts,
/// `svg_color` is a lighter shade tuned for the README badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Library {
    pub name: &'static str,
    pub display_name: &'static str,
    pub short_name: &'static str,
    pub base_color: [u8; 3],
    pub svg_color: [u8; 3],
    /// Implements the Reader/Writer streaming API.
    pub streaming: bool,
    /// Part of the default dashboard selection.
    pub default_selected: bool,
}

impl Library {
    /// File holding `{"aggregations": [...]}` for this library.
    pub fn aggregation_file(&self) -> String {
        format!("{}-aggregation.json", self.name)
    }

    /// File holding `{"benchmarks": [...]}` raw runs for this library.
    pub fn raw_file(&self) -> String {
        format!("{}.json", self.name)
    }
}

/// All benchmarked libraries. ZTYP is excluded from the default selection
/// because its results dwarf the others on a shared axis.
pub const LIBRARIES: &[Library] = &[
    Library {
        name: "fastssz-v1",
        display_name: "FastSSZ v1",
        short_name: "Fast v1",
        base_color: [37, 99, 235],
        svg_color: [96, 165, 250],
        streaming: false,
        default_selected: true,
    },
    Library {
        name: "fastssz-v2",
        display_name: "FastSSZ v2",
        short_name: "Fast v2",
        base_color: [59, 130, 246],
        svg_color: [147, 197, 253],
        streaming: false,
        default_selected: true,
    },
    Library {
        name: "dynamicssz-codegen",
        display_name: "DynamicSSZ Codegen",
        short_name: "Dyn Code",
        base_color: [34, 197, 94],
        svg_color: [74, 222, 128],
        streaming: true,
        default_selected: true,
    },
    Library {
        name: "dynamicssz-reflection",
        display_name: "DynamicSSZ Reflection",
        short_name: "Dyn Refl",
        base_color: [74, 222, 128],
        svg_color: [134, 239, 172],
        streaming: true,
        default_selected: true,
    },
    Library {
        name: "karalabessz",
        display_name: "Karalabe SSZ",
        short_name: "Karalabe",
        base_color: [249, 115, 22],
        svg_color: [251, 146, 60],
        streaming: true,
        default_selected: true,
    },
    Library {
        name: "ztyp",
        display_name: "ZTYP",
        short_name: "ZTYP",
        base_color: [168, 85, 247],
        svg_color: [192, 132, 252],
        streaming: false,
        default_selected: false,
    },
];

/// Looks up a library by its identity name.
pub fn find(name: &str) -> Option<&'static Library> {
    LIBRARIES.iter().find(|l| l.name == name)
}

/// Consensus fork and encoded payload size for one (payload, preset) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadMetadata {
    pub fork: &'static str,
    pub size: u64,
}

/// Encoded-size metadata shown in chart subtitles and badge section headers.
pub fn payload_metadata(kind: PayloadKind, preset: Preset) -> PayloadMetadata {
    let (fork, mainnet, minimal) = match kind {
        PayloadKind::Block => ("Deneb", 129_952, 130_124),
        PayloadKind::State => ("Deneb", 16_784_725, 13_913_173),
    };
    let size = match preset {
        Preset::Mainnet => mainnet,
        Preset::Minimal => minimal,
    };
    PayloadMetadata { fork, size }
}
