//! `AggregateExec`: group-by and aggregate expressions become the output
//! schema. A binning call in the group-by (`date_bin`, `date_trunc`) keeps
//! its bucketed output in the sort order right after the source column when
//! that source was already sorted — bucketing a sorted column preserves its
//! run structure.

use super::{GenerationContext, NodeInfo, emit_stage, generate_sole_child, stage_info, truncate_detail};
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
    let gby_raw = node.property("gby");
    let gby_names = gby_raw.map(properties::parse_expression_names).unwrap_or_default();
    let aggr_names = node
        .property("aggr")
        .map(properties::parse_expression_names)
        .unwrap_or_default();

    let mut detail = Vec::new();
    if let Some(mode) = node.property("mode") {
        detail.push(format!("mode={mode}"));
    }
    if !gby_names.is_empty() {
        detail.push(truncate_detail(&format!("gby: {}", gby_names.join(", "))));
    }
    if !aggr_names.is_empty() {
        detail.push(truncate_detail(&format!("aggr: {}", aggr_names.join(", "))));
    }

    let stage = emit_stage(ctx, &node.operator, &detail, x, y);
    let child = generate_sole_child(node, &stage, ctx)?;

    let input_total = child.as_ref().map(|c| c.input_arrow_count).unwrap_or(0);
    let mut output_columns: Vec<String> = gby_names.iter().chain(aggr_names.iter()).cloned().collect();
    if output_columns.is_empty() {
        output_columns = child.as_ref().map(|c| c.output_columns.clone()).unwrap_or_default();
    }

    let mut output_sort_order = child.map(|c| c.output_sort_order).unwrap_or_default();
    if let Some(raw) = gby_raw {
        for expr in properties::split_expression_list(raw) {
            let Some((name, source)) = properties::binning_promotion(&expr) else {
                continue;
            };
            if output_sort_order.contains(&name) {
                continue;
            }
            if let Some(position) = output_sort_order.iter().position(|col| *col == source) {
                output_sort_order.insert(position + 1, name);
            }
        }
    }

    let span = arrows::output_positions(input_total, stage.x, stage.width);
    Ok(stage_info(&stage, span, output_columns, output_sort_order))
}
