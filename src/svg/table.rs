// Table badge: libraries as rows, operations as columns (Time/Mem
// sub-columns), Block and State sections. Mainnet preset, latest stable
// version per library.

use super::{BadgeLibrary, Scheme};
use crate::format::{format_memory_compact, format_time_compact, format_version};
use crate::libraries::payload_metadata;
use crate::models::{Operation, PayloadKind, Preset, operation_key};

const FONT: &str = "system-ui, -apple-system, sans-serif";

const LIB_COL_WIDTH: f64 = 230.0;
const OP_COL_WIDTH: f64 = 95.0;
const CELL_HEIGHT: f64 = 38.0;
const HEADER_HEIGHT: f64 = 44.0;
const TYPE_HEADER_HEIGHT: f64 = 28.0;
const SUB_HEADER_HEIGHT: f64 = 18.0;
const PADDING: f64 = 15.0;
const SECTION_GAP: f64 = 12.0;

/// A time within 2µs of the best counts as best; memory must match to
/// within a hundredth of a byte.
const BEST_TIME_TOLERANCE_NS: f64 = 2000.0;
const BEST_MEM_TOLERANCE: f64 = 0.01;

struct Theme {
    background: &'static str,
    title: &'static str,
    subtitle: &'static str,
    header_bg: &'static str,
    header_text: &'static str,
    sub_header_text: &'static str,
    type_bg: &'static str,
    type_text: &'static str,
    row_even_bg: &'static str,
    row_odd_bg: &'static str,
    library_name: &'static str,
    version_text: &'static str,
    value_text: &'static str,
    best_time_indicator: &'static str,
    best_time_text: &'static str,
    best_mem_indicator: &'static str,
    best_mem_text: &'static str,
    empty_text: &'static str,
    divider: &'static str,
    divider_light: &'static str,
}

impl Theme {
    fn for_scheme(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Dark => Theme {
                background: "#0d1117",
                title: "rgba(248, 250, 252, 0.95)",
                subtitle: "rgba(148, 163, 184, 0.8)",
                header_bg: "rgba(30, 41, 59, 0.9)",
                header_text: "rgba(248, 250, 252, 0.9)",
                sub_header_text: "rgba(148, 163, 184, 0.7)",
                type_bg: "rgba(51, 65, 85, 0.7)",
                type_text: "rgba(248, 250, 252, 0.85)",
                row_even_bg: "rgba(30, 41, 59, 0.5)",
                row_odd_bg: "rgba(30, 41, 59, 0.3)",
                library_name: "rgba(248, 250, 252, 0.9)",
                version_text: "rgba(148, 163, 184, 0.7)",
                value_text: "rgba(203, 213, 225, 0.9)",
                best_time_indicator: "rgba(74, 222, 128, 0.6)",
                best_time_text: "rgba(134, 239, 172, 1)",
                best_mem_indicator: "rgba(96, 165, 250, 0.6)",
                best_mem_text: "rgba(147, 197, 253, 1)",
                empty_text: "rgba(100, 116, 139, 0.6)",
                divider: "rgba(148, 163, 184, 0.25)",
                divider_light: "rgba(148, 163, 184, 0.15)",
            },
            Scheme::Light => Theme {
                background: "#ffffff",
                title: "rgba(15, 23, 42, 0.95)",
                subtitle: "rgba(71, 85, 105, 0.9)",
                header_bg: "rgba(241, 245, 249, 1)",
                header_text: "rgba(15, 23, 42, 0.9)",
                sub_header_text: "rgba(71, 85, 105, 0.8)",
                type_bg: "rgba(226, 232, 240, 1)",
                type_text: "rgba(15, 23, 42, 0.85)",
                row_even_bg: "rgba(248, 250, 252, 1)",
                row_odd_bg: "rgba(241, 245, 249, 1)",
                library_name: "rgba(15, 23, 42, 0.9)",
                version_text: "rgba(71, 85, 105, 0.8)",
                value_text: "rgba(51, 65, 85, 0.9)",
                best_time_indicator: "rgba(34, 197, 94, 0.7)",
                best_time_text: "rgba(22, 163, 74, 1)",
                best_mem_indicator: "rgba(59, 130, 246, 0.7)",
                best_mem_text: "rgba(37, 99, 235, 1)",
                empty_text: "rgba(148, 163, 184, 0.7)",
                divider: "rgba(71, 85, 105, 0.2)",
                divider_light: "rgba(71, 85, 105, 0.1)",
            },
        }
    }
}

fn op_label(op: Operation) -> &'static str {
    match op {
        Operation::HashTreeRoot => "HTR",
        other => other.name(),
    }
}

/// Best (lowest) time and memory for one operation/payload column, across
/// all libraries in the badge.
fn best_values(data: &[BadgeLibrary], op: Operation, payload: PayloadKind) -> (f64, f64) {
    let key = operation_key(op.name(), Preset::Mainnet, payload);
    let mut best_time = f64::INFINITY;
    let mut best_mem = f64::INFINITY;
    for lib in data {
        if let Some(result) = lib.results.get(&key) {
            best_time = best_time.min(result.ns_op[0]);
            best_mem = best_mem.min(result.bytes[0]);
        }
    }
    (best_time, best_mem)
}

/// Renders the full table badge as an SVG document.
pub fn generate(data: &[BadgeLibrary], scheme: Scheme) -> String {
    let colors = Theme::for_scheme(scheme);
    let num_ops = Operation::ALL.len() as f64;

    let table_width = LIB_COL_WIDTH + num_ops * OP_COL_WIDTH * 2.0;
    let rows_per_section = data.len() as f64;
    let section_height = TYPE_HEADER_HEIGHT + SUB_HEADER_HEIGHT + rows_per_section * CELL_HEIGHT;
    let num_types = PayloadKind::ALL.len() as f64;
    let table_height = HEADER_HEIGHT + num_types * section_height + (num_types - 1.0) * SECTION_GAP;

    let total_width = table_width + PADDING * 2.0;
    let total_height = table_height + PADDING * 2.0 + 50.0;

    let mut svg = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
         \x20 <rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>\n",
        w = total_width,
        h = total_height,
        bg = colors.background,
    );

    svg.push_str(&format!(
        "<text x=\"{x}\" y=\"24\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"18\" font-weight=\"700\" fill=\"{fill}\">SSZ Benchmark Results</text>",
        x = total_width / 2.0,
        fill = colors.title,
    ));
    svg.push_str(&format!(
        "<text x=\"{x}\" y=\"44\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"11\" fill=\"{fill}\">Mainnet • Latest Stable • Lower is Better • ● = Best • Generated: {date}</text>",
        x = total_width / 2.0,
        fill = colors.subtitle,
        date = super::generated_at(),
    ));

    let table_x = PADDING;
    let table_y = 56.0;

    // Header row: operation names with Time/Mem sub-headers
    svg.push_str(&format!(
        "<rect x=\"{table_x}\" y=\"{table_y}\" width=\"{LIB_COL_WIDTH}\" height=\"{HEADER_HEIGHT}\" fill=\"{bg}\" rx=\"6\"/>",
        bg = colors.header_bg,
    ));
    svg.push_str(&format!(
        "<text x=\"{x}\" y=\"{y}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"13\" font-weight=\"600\" fill=\"{fill}\">Library</text>",
        x = table_x + LIB_COL_WIDTH / 2.0,
        y = table_y + HEADER_HEIGHT / 2.0 + 5.0,
        fill = colors.header_text,
    ));

    for (op_idx, op) in Operation::ALL.iter().enumerate() {
        let x = table_x + LIB_COL_WIDTH + op_idx as f64 * OP_COL_WIDTH * 2.0;
        svg.push_str(&format!(
            "<rect x=\"{x}\" y=\"{table_y}\" width=\"{w}\" height=\"{HEADER_HEIGHT}\" fill=\"{bg}\"/>",
            w = OP_COL_WIDTH * 2.0,
            bg = colors.header_bg,
        ));
        svg.push_str(&format!(
            "<text x=\"{cx}\" y=\"{cy}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"12\" font-weight=\"600\" fill=\"{fill}\">{label}</text>",
            cx = x + OP_COL_WIDTH,
            cy = table_y + 18.0,
            fill = colors.header_text,
            label = op_label(*op),
        ));
        svg.push_str(&format!(
            "<text x=\"{cx}\" y=\"{cy}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"10\" fill=\"{fill}\">Time</text>",
            cx = x + OP_COL_WIDTH / 2.0,
            cy = table_y + 36.0,
            fill = colors.sub_header_text,
        ));
        svg.push_str(&format!(
            "<text x=\"{cx}\" y=\"{cy}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"10\" fill=\"{fill}\">Mem</text>",
            cx = x + OP_COL_WIDTH * 1.5,
            cy = table_y + 36.0,
            fill = colors.sub_header_text,
        ));
        if op_idx > 0 {
            svg.push_str(&format!(
                "<line x1=\"{x}\" y1=\"{table_y}\" x2=\"{x}\" y2=\"{y2}\" stroke=\"{stroke}\"/>",
                y2 = table_y + HEADER_HEIGHT,
                stroke = colors.divider,
            ));
        }
    }

    let mut current_y = table_y + HEADER_HEIGHT;

    for (type_idx, payload) in PayloadKind::ALL.iter().enumerate() {
        if type_idx > 0 {
            current_y += SECTION_GAP;
        }

        // Section header with fork + payload size metadata
        let meta = payload_metadata(*payload, Preset::Mainnet);
        let meta_text = format!(" ({} · {})", meta.fork, format_memory_compact(meta.size as f64));
        svg.push_str(&format!(
            "<rect x=\"{table_x}\" y=\"{current_y}\" width=\"{table_width}\" height=\"{TYPE_HEADER_HEIGHT}\" fill=\"{bg}\"/>",
            bg = colors.type_bg,
        ));
        svg.push_str(&format!(
            "<text x=\"{cx}\" y=\"{cy}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"12\" font-weight=\"600\" fill=\"{fill}\">{payload}<tspan font-weight=\"400\" font-size=\"10\" fill=\"{sub}\">{meta_text}</tspan></text>",
            cx = table_x + table_width / 2.0,
            cy = current_y + TYPE_HEADER_HEIGHT / 2.0 + 4.0,
            fill = colors.type_text,
            sub = colors.sub_header_text,
        ));
        current_y += TYPE_HEADER_HEIGHT;

        for (lib_idx, lib) in data.iter().enumerate() {
            let row_y = current_y + lib_idx as f64 * CELL_HEIGHT;
            let row_bg = if lib_idx % 2 == 0 {
                colors.row_even_bg
            } else {
                colors.row_odd_bg
            };
            svg.push_str(&format!(
                "<rect x=\"{table_x}\" y=\"{row_y}\" width=\"{table_width}\" height=\"{CELL_HEIGHT}\" fill=\"{row_bg}\"/>",
            ));

            // Library cell: color swatch, name, version
            svg.push_str(&format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"10\" height=\"20\" fill=\"{fill}\" rx=\"2\"/>",
                x = table_x + 6.0,
                y = row_y + 8.0,
                fill = crate::chart::rgba(lib.library.svg_color, 0.9),
            ));
            svg.push_str(&format!(
                "<text x=\"{x}\" y=\"{y}\" font-family=\"{FONT}\" font-size=\"11\" fill=\"{fill}\">{name}</text>",
                x = table_x + 22.0,
                y = row_y + 16.0,
                fill = colors.library_name,
                name = lib.library.display_name,
            ));
            svg.push_str(&format!(
                "<text x=\"{x}\" y=\"{y}\" font-family=\"{FONT}\" font-size=\"8\" fill=\"{fill}\">{version}</text>",
                x = table_x + 22.0,
                y = row_y + 28.0,
                fill = colors.version_text,
                version = format_version(&lib.version),
            ));

            for (op_idx, op) in Operation::ALL.iter().enumerate() {
                let key = operation_key(op.name(), Preset::Mainnet, *payload);
                let cell_x = table_x + LIB_COL_WIDTH + op_idx as f64 * OP_COL_WIDTH * 2.0;
                let (best_time, best_mem) = best_values(data, *op, *payload);

                if let Some(result) = lib.results.get(&key) {
                    let time_val = result.ns_op[0];
                    let mem_val = result.bytes[0];
                    let is_best_time = (time_val - best_time) <= BEST_TIME_TOLERANCE_NS;
                    let is_best_mem = (mem_val - best_mem).abs() < BEST_MEM_TOLERANCE;

                    if is_best_time {
                        svg.push_str(&format!(
                            "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"4\" fill=\"{fill}\"/>",
                            cx = cell_x + OP_COL_WIDTH / 2.0 - 22.0,
                            cy = row_y + CELL_HEIGHT / 2.0,
                            fill = colors.best_time_indicator,
                        ));
                    }
                    svg.push_str(&format!(
                        "<text x=\"{x}\" y=\"{y}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"11\" font-weight=\"{weight}\" fill=\"{fill}\">{value}</text>",
                        x = cell_x + OP_COL_WIDTH / 2.0,
                        y = row_y + CELL_HEIGHT / 2.0 + 4.0,
                        weight = if is_best_time { "600" } else { "400" },
                        fill = if is_best_time { colors.best_time_text } else { colors.value_text },
                        value = format_time_compact(time_val),
                    ));

                    if is_best_mem {
                        svg.push_str(&format!(
                            "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"4\" fill=\"{fill}\"/>",
                            cx = cell_x + OP_COL_WIDTH * 1.5 - 22.0,
                            cy = row_y + CELL_HEIGHT / 2.0,
                            fill = colors.best_mem_indicator,
                        ));
                    }
                    svg.push_str(&format!(
                        "<text x=\"{x}\" y=\"{y}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"11\" font-weight=\"{weight}\" fill=\"{fill}\">{value}</text>",
                        x = cell_x + OP_COL_WIDTH * 1.5,
                        y = row_y + CELL_HEIGHT / 2.0 + 4.0,
                        weight = if is_best_mem { "600" } else { "400" },
                        fill = if is_best_mem { colors.best_mem_text } else { colors.value_text },
                        value = format_memory_compact(mem_val),
                    ));
                } else {
                    svg.push_str(&format!(
                        "<text x=\"{x}\" y=\"{y}\" text-anchor=\"middle\" font-family=\"{FONT}\" font-size=\"11\" fill=\"{fill}\">—</text>",
                        x = cell_x + OP_COL_WIDTH,
                        y = row_y + CELL_HEIGHT / 2.0 + 4.0,
                        fill = colors.empty_text,
                    ));
                }

                if op_idx > 0 {
                    svg.push_str(&format!(
                        "<line x1=\"{cell_x}\" y1=\"{row_y}\" x2=\"{cell_x}\" y2=\"{y2}\" stroke=\"{stroke}\"/>",
                        y2 = row_y + CELL_HEIGHT,
                        stroke = colors.divider_light,
                    ));
                }
            }
        }

        current_y += data.len() as f64 * CELL_HEIGHT;
    }

    svg.push_str("</svg>");
    svg
}
