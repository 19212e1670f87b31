//! File-group sources: `DataSourceExec`, `ParquetExec`, `CsvExec`.
//!
//! A scan is a leaf; its output fan-out is the number of parsed file groups.
//! Unparseable `file_groups` text degrades to the raw string as detail and a
//! zero count (the parent floors that to one drawn arrow).

use super::{GenerationContext, NodeInfo, emit_stage, stage_info, truncate_detail};
use crate::arrows;
use crate::error::GenerateError;
use crate::plan::PlanNode;
use crate::properties;

pub(super) fn generate(
    node: &PlanNode,
    x: f32,
    y: f32,
    _is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    let file_groups = node.property("file_groups");
    let group_count = file_groups.map(properties::parse_file_group_count).unwrap_or(0);

    let mut detail = Vec::new();
    match (group_count, file_groups) {
        (0, Some(raw)) => detail.push(truncate_detail(raw)),
        (0, None) => {}
        (1, _) => detail.push("1 file group".to_string()),
        (n, _) => detail.push(format!("{n} file groups")),
    }
    if let Some(raw) = file_groups {
        let paths = properties::parse_file_group_paths(raw);
        if !paths.is_empty() {
            detail.push(truncate_detail(&paths.join(", ")));
        }
    }
    if let Some(format) = node.property("file_type") {
        detail.push(format!("file_type={format}"));
    }

    let stage = emit_stage(ctx, &node.operator, &detail, x, y);

    let output_columns = node
        .property("projection")
        .map(properties::parse_column_list)
        .unwrap_or_default();
    let output_sort_order = node
        .property("output_ordering")
        .map(properties::parse_sort_expressions)
        .unwrap_or_default();

    let span = arrows::output_positions(group_count, stage.x, stage.width);
    Ok(stage_info(&stage, span, output_columns, output_sort_order))
}
