//! Fallback for operator tags with no dedicated strategy. The stage renders
//! with its name in an attention color and an explicit "unimplemented"
//! marker, and behaves as a pass-through for arrows and schema so the rest
//! of the tree still lays out.

use super::{ArrowTarget, GenerationContext, NodeInfo, anchor_for, connect_child,
    emit_stage_with_color, placement, stage_info};
use crate::arrows;
use crate::error::GenerateError;
use crate::plan::PlanNode;

const ATTENTION_COLOR: &str = "#e03131";

pub(super) fn generate(
    node: &PlanNode,
    x: f32,
    y: f32,
    _is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    let detail = vec!["unimplemented".to_string()];
    let stage = emit_stage_with_color(ctx, &node.operator, ATTENTION_COLOR, &detail, x, y);
    let children = placement::generate_children_row(node, &stage, ctx)?;

    let slices = children.len();
    for (index, child) in children.iter().enumerate() {
        let target = ArrowTarget::bottom_slice(&stage, index, slices);
        let anchor = anchor_for(child, &stage);
        connect_child(ctx, child, &target, anchor);
    }

    let input_total: usize = children.iter().map(|c| c.input_arrow_count).sum();
    let (output_columns, output_sort_order) = children
        .into_iter()
        .next()
        .map(|first| (first.output_columns, first.output_sort_order))
        .unwrap_or_default();

    let span = arrows::output_positions(input_total, stage.x, stage.width);
    Ok(stage_info(&stage, span, output_columns, output_sort_order))
}
