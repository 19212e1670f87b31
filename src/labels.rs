//! Column labels and node detail text.
//!
//! Column lists render as one horizontal line of text runs next to the arrow
//! bundle; consecutive columns with the same sortedness merge into a single
//! run so a sorted prefix reads as one green span instead of n tiny shapes.

use crate::config::DiagramConfig;
use crate::document::Element;
use crate::element::{self, FONT_FAMILY_CODE, LINE_HEIGHT};
use crate::id::IdGenerator;
use crate::text_metrics;

pub const SORTED_COLOR: &str = "#2f9e44";
pub const UNSORTED_COLOR: &str = "#495057";
pub const DETAIL_COLOR: &str = "#495057";

const LABEL_GAP: f32 = 10.0;

/// One merged run of column names sharing a color classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRun {
    pub text: String,
    pub sorted: bool,
}

/// Which side of the arrow bundle the labels sit on, driven by which side of
/// the parent the data flow approaches from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    RightOfArrows,
    LeftOfArrows,
}

/// Merges consecutive columns with the same sortedness into comma-joined
/// runs. Separators ride on the preceding run so the line stays continuous.
pub fn column_runs(columns: &[String], sort_order: &[String]) -> Vec<ColumnRun> {
    let mut runs: Vec<ColumnRun> = Vec::new();
    for column in columns {
        let sorted = sort_order.contains(column);
        match runs.last_mut() {
            Some(run) if run.sorted == sorted => {
                run.text.push_str(", ");
                run.text.push_str(column);
            }
            _ => runs.push(ColumnRun {
                text: column.clone(),
                sorted,
            }),
        }
    }
    let last = runs.len().saturating_sub(1);
    for run in runs.iter_mut().take(last) {
        run.text.push_str(", ");
    }
    runs
}

/// Builds the text shapes for one column list, anchored beside the arrows at
/// `anchor_x` and vertically centered on `center_y`.
pub fn column_label_elements(
    ids: &mut IdGenerator,
    config: &DiagramConfig,
    columns: &[String],
    sort_order: &[String],
    anchor_x: f32,
    center_y: f32,
    anchor: LabelAnchor,
) -> Vec<Element> {
    let runs = column_runs(columns, sort_order);
    if runs.is_empty() {
        return Vec::new();
    }

    let widths: Vec<f32> = runs
        .iter()
        .map(|run| text_metrics::line_width(&run.text, config.font_size))
        .collect();
    let total: f32 = widths.iter().sum();
    let mut cursor = match anchor {
        LabelAnchor::RightOfArrows => anchor_x + LABEL_GAP,
        LabelAnchor::LeftOfArrows => anchor_x - LABEL_GAP - total,
    };
    let top = center_y - config.font_size * LINE_HEIGHT / 2.0;

    let mut elements = Vec::with_capacity(runs.len());
    for (run, width) in runs.iter().zip(&widths) {
        let color = if run.sorted {
            SORTED_COLOR
        } else {
            UNSORTED_COLOR
        };
        elements.push(element::text(
            ids,
            cursor,
            top,
            &run.text,
            config.font_size,
            FONT_FAMILY_CODE,
            color,
            None,
        ));
        cursor += width;
    }
    elements
}

const WRAP_MAX_CHARS: usize = 36;
const WRAP_MAX_LINES: usize = 2;

/// Wraps one long detail string at word boundaries. At most
/// [`WRAP_MAX_LINES`] lines come back; overflow is elided with "…" so a
/// degenerate predicate cannot outgrow its box.
pub fn wrap_detail(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= WRAP_MAX_CHARS {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.len() > WRAP_MAX_LINES {
        lines.truncate(WRAP_MAX_LINES);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

/// Multi-line detail text centered under a node's operator label.
pub fn detail_text_element(
    ids: &mut IdGenerator,
    config: &DiagramConfig,
    lines: &[String],
    center_x: f32,
    y: f32,
    group: Option<&str>,
) -> Option<Element> {
    let lines: Vec<&str> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }
    let content = lines.join("\n");
    Some(element::centered_text(
        ids,
        center_x,
        y,
        &content,
        config.detail_font_size,
        FONT_FAMILY_CODE,
        DETAIL_COLOR,
        group,
    ))
}
