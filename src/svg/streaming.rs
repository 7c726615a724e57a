// Streaming badge: vertical bar charts for the Reader/Writer operations,
// one row per (payload type, metric), streaming-capable libraries only.

use super::{BadgeLibrary, Scheme};
use crate::chart::rgba;
use crate::format::{format_memory_compact, format_time_compact, format_version};
use crate::libraries::payload_metadata;
use crate::models::{Metric, Operation, PayloadKind, Preset, operation_key};

const FONT: &str = "system-ui, -apple-system, sans-serif";

const CHART_WIDTH: f64 = 252.0;
const CHART_HEIGHT: f64 = 210.0;
const BAR_WIDTH: f64 = 36.0;
const PADDING_TOP: f64 = 36.0;
const PADDING_RIGHT: f64 = 12.0;
const PADDING_BOTTOM: f64 = 72.0;
const PADDING_LEFT: f64 = 12.0;
const CHART_GAP: f64 = 10.0;
const ROW_GAP: f64 = 12.0;

const TYPE_LABEL_WIDTH: f64 = 24.0;
const METRIC_LABEL_WIDTH: f64 = 28.0;

/// Bars within 2µs of the best value get the glow treatment.
const BEST_TOLERANCE_NS: f64 = 2000.0;

struct Theme {
    background: &'static str,
    chart_bg: &'static str,
    chart_border: &'static str,
    title: &'static str,
    subtitle: &'static str,
    chart_title: &'static str,
    row_label: &'static str,
    row_sublabel: &'static str,
    value_text: &'static str,
    version_text: &'static str,
    glow_alpha: f64,
}

impl Theme {
    fn for_scheme(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Dark => Theme {
                background: "#0d1117",
                chart_bg: "rgba(30, 41, 59, 0.8)",
                chart_border: "rgba(148, 163, 184, 0.2)",
                title: "rgba(248, 250, 252, 0.95)",
                subtitle: "rgba(148, 163, 184, 0.8)",
                chart_title: "rgba(248, 250, 252, 0.95)",
                row_label: "rgba(248, 250, 252, 0.9)",
                row_sublabel: "rgba(148, 163, 184, 0.7)",
                value_text: "rgba(248, 250, 252, 0.9)",
                version_text: "rgba(148, 163, 184, 0.7)",
                glow_alpha: 0.5,
            },
            Scheme::Light => Theme {
                background: "#ffffff",
                chart_bg: "rgba(241, 245, 249, 1)",
                chart_border: "rgba(71, 85, 105, 0.2)",
                title: "rgba(15, 23, 42, 0.95)",
                subtitle: "rgba(71, 85, 105, 0.9)",
                chart_title: "rgba(15, 23, 42, 0.95)",
                row_label: "rgba(15, 23, 42, 0.9)",
                row_sublabel: "rgba(71, 85, 105, 0.8)",
                value_text: "rgba(15, 23, 42, 0.9)",
                version_text: "rgba(71, 85, 105, 0.8)",
                glow_alpha: 0.7,
            },
        }
    }
}

struct BarItem {
    short_name: &'static str,
    version: String,
    color: [u8; 3],
    value: f64,
}

struct ChartSpec {
    title: String,
    items: Vec<BarItem>,
    metric: Metric,
}

struct RowSpec {
    metric_label: &'static str,
    charts: Vec<ChartSpec>,
}

fn format_value(value: f64, metric: Metric) -> String {
    match metric {
        Metric::Memory => format_memory_compact(value),
        _ => format_time_compact(value),
    }
}

const STREAM_OPERATIONS: [(Operation, &str); 2] = [
    (Operation::Unmarshal, "Unmarshal (Stream)"),
    (Operation::Marshal, "Marshal (Stream)"),
];

fn bar_chart(spec: &ChartSpec, colors: &Theme) -> String {
    let inner_width = CHART_WIDTH - PADDING_LEFT - PADDING_RIGHT;
    let inner_height = CHART_HEIGHT - PADDING_TOP - PADDING_BOTTOM;

    let max_value = spec
        .items
        .iter()
        .map(|i| i.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let best_value = spec.items.iter().map(|i| i.value).fold(f64::INFINITY, f64::min);
    let bar_spacing = inner_width / spec.items.len() as f64;
    let actual_bar_width = BAR_WIDTH.min(bar_spacing - 2.0);
    let label_area_y = PADDING_TOP + inner_height + 8.0;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{CHART_WIDTH}\" height=\"{CHART_HEIGHT}\" fill=\"{bg}\" rx=\"8\" stroke=\"{stroke}\"/>",
        bg = colors.chart_bg,
        stroke = colors.chart_border,
    ));
    svg.push_str(&format!(
        "<text x=\"{x}\" y=\"22\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"13\" font-weight=\"600\" fill=\"{fill}\">{title}</text>",
        x = CHART_WIDTH / 2.0,
        fill = colors.chart_title,
        title = spec.title,
    ));

    for (i, item) in spec.items.iter().enumerate() {
        let x = PADDING_LEFT + i as f64 * bar_spacing + (bar_spacing - actual_bar_width) / 2.0;
        let bar_height = if max_value > 0.0 {
            item.value / max_value * inner_height
        } else {
            0.0
        };
        let y = PADDING_TOP + inner_height - bar_height;
        let bar_center_x = x + actual_bar_width / 2.0;
        let is_best = (item.value - best_value) <= BEST_TOLERANCE_NS;

        if is_best {
            svg.push_str(&format!(
                "<rect x=\"{gx}\" y=\"{gy}\" width=\"{gw}\" height=\"{gh}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"2\" rx=\"2\" filter=\"url(#glow)\"/>",
                gx = x - 1.0,
                gy = y - 1.0,
                gw = actual_bar_width + 2.0,
                gh = bar_height + 2.0,
                stroke = rgba(item.color, colors.glow_alpha),
            ));
        }
        svg.push_str(&format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{actual_bar_width}\" height=\"{h}\" fill=\"{fill}\" rx=\"2\"/>",
            h = bar_height.max(2.0),
            fill = rgba(item.color, 0.85),
        ));
        svg.push_str(&format!(
            "<text x=\"{bar_center_x}\" y=\"{vy}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"9\" font-weight=\"500\" fill=\"{fill}\">{value}</text>",
            vy = y - 4.0,
            fill = colors.value_text,
            value = format_value(item.value, spec.metric),
        ));

        // Rotated name + version below the bar
        svg.push_str(&format!(
            "<g transform=\"translate({bar_center_x}, {label_area_y}) rotate(-55)\">\
             <text x=\"0\" y=\"0\" text-anchor=\"end\" font-family=\"{FONT}\" font-size=\"12\" font-weight=\"500\" fill=\"{name_fill}\">{name}</text>\
             <text x=\"0\" y=\"13\" text-anchor=\"end\" font-family=\"{FONT}\" font-size=\"9\" fill=\"{ver_fill}\">{version}</text>\
             </g>",
            name_fill = rgba(item.color, 0.95),
            name = item.short_name,
            ver_fill = colors.version_text,
            version = item.version,
        ));
    }

    svg
}

/// Renders the streaming badge as an SVG document.
pub fn generate(data: &[BadgeLibrary], scheme: Scheme) -> String {
    let colors = Theme::for_scheme(scheme);

    // One row per (payload, metric) holding a chart per streaming operation
    let mut rows: Vec<RowSpec> = Vec::new();
    for payload in PayloadKind::ALL {
        for (metric, metric_label) in [(Metric::Time, "Time"), (Metric::Memory, "Memory")] {
            let mut charts = Vec::new();
            for (operation, label) in STREAM_OPERATIONS {
                let Some(stream_name) = operation.stream_name() else {
                    continue;
                };
                let key = operation_key(stream_name, Preset::Mainnet, payload);
                let items: Vec<BarItem> = data
                    .iter()
                    .filter_map(|lib| {
                        lib.results.get(&key).map(|result| BarItem {
                            short_name: lib.library.short_name,
                            version: format_version(&lib.version),
                            color: lib.library.svg_color,
                            value: result.stat(metric).value,
                        })
                    })
                    .collect();
                if !items.is_empty() {
                    charts.push(ChartSpec {
                        title: label.to_string(),
                        items,
                        metric,
                    });
                }
            }
            if !charts.is_empty() {
                rows.push(RowSpec {
                    metric_label,
                    charts,
                });
            }
        }
    }

    let charts_per_row = 2.0;
    let label_area_width = TYPE_LABEL_WIDTH + METRIC_LABEL_WIDTH;
    let row_width = charts_per_row * CHART_WIDTH + (charts_per_row - 1.0) * CHART_GAP;
    let total_width = row_width + label_area_width;
    let row_height = CHART_HEIGHT + ROW_GAP;
    let total_height = rows.len() as f64 * row_height + 60.0;

    let mut svg = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
         \x20 <defs>\n\
         \x20   <filter id=\"glow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\n\
         \x20     <feGaussianBlur stdDeviation=\"2\" result=\"blur\"/>\n\
         \x20     <feMerge><feMergeNode in=\"blur\"/><feMergeNode in=\"SourceGraphic\"/></feMerge>\n\
         \x20   </filter>\n\
         \x20 </defs>\n\
         \x20 <rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>\n",
        w = total_width,
        h = total_height,
        bg = colors.background,
    );

    svg.push_str(&format!(
        "<text x=\"{x}\" y=\"24\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"18\" font-weight=\"700\" fill=\"{fill}\">SSZ Streaming Benchmark</text>",
        x = total_width / 2.0,
        fill = colors.title,
    ));
    svg.push_str(&format!(
        "<text x=\"{x}\" y=\"44\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"11\" fill=\"{fill}\">Mainnet • Reader/Writer APIs • Lower is Better • Generated: {date}</text>",
        x = total_width / 2.0,
        fill = colors.subtitle,
        date = super::generated_at(),
    ));

    let start_y = 60.0;
    let charts_start_x = label_area_width;

    // Payload labels, rotated, each spanning its two metric rows
    let type_label_x = TYPE_LABEL_WIDTH / 2.0;
    for (type_idx, payload) in PayloadKind::ALL.iter().enumerate() {
        let type_y = start_y + (type_idx * 2) as f64 * row_height;
        let type_center_y = type_y + row_height;
        let meta = payload_metadata(*payload, Preset::Mainnet);
        let meta_text = format!("{} · {}", meta.fork, format_memory_compact(meta.size as f64));

        svg.push_str(&format!(
            "<g transform=\"translate({type_label_x}, {type_center_y}) rotate(-90)\">\
             <text x=\"0\" y=\"-6\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"{FONT}\" font-size=\"14\" font-weight=\"600\" fill=\"{fill}\">{payload}</text>\
             <text x=\"0\" y=\"10\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"{FONT}\" font-size=\"9\" fill=\"{sub}\">{meta_text}</text>\
             </g>",
            fill = colors.row_label,
            sub = colors.row_sublabel,
        ));
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let y = start_y + row_idx as f64 * row_height;
        let row_center_y = y + CHART_HEIGHT / 2.0;

        let metric_label_x = TYPE_LABEL_WIDTH + METRIC_LABEL_WIDTH / 2.0;
        svg.push_str(&format!(
            "<g transform=\"translate({metric_label_x}, {row_center_y}) rotate(-90)\">\
             <text x=\"0\" y=\"0\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"{FONT}\" font-size=\"11\" fill=\"{fill}\">{label}</text>\
             </g>",
            fill = colors.row_sublabel,
            label = row.metric_label,
        ));

        for (chart_idx, chart) in row.charts.iter().enumerate() {
            let x = charts_start_x + chart_idx as f64 * (CHART_WIDTH + CHART_GAP);
            svg.push_str(&format!("<g transform=\"translate({x}, {y})\">"));
            svg.push_str(&bar_chart(chart, &colors));
            svg.push_str("</g>");
        }
    }

    svg.push_str("</svg>");
    svg
}
