use super::{GenerationContext, NodeInfo, emit_stage, generate_sole_child, stage_info};
use crate::arrows;
use crate::error::GenerateError;
use crate::plan::PlanNode;

pub(super) fn generate(
    node: &PlanNode,
    x: f32,
    y: f32,
    _is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    let detail: Vec<String> = node
        .property("target_batch_size")
        .map(|size| vec![format!("target_batch_size={size}")])
        .unwrap_or_default();

    let stage = emit_stage(ctx, &node.operator, &detail, x, y);
    let child = generate_sole_child(node, &stage, ctx)?;

    let input_total = child.as_ref().map(|c| c.input_arrow_count).unwrap_or(0);
    let (output_columns, output_sort_order) = child
        .map(|c| (c.output_columns, c.output_sort_order))
        .unwrap_or_default();

    let span = arrows::output_positions(input_total, stage.x, stage.width);
    Ok(stage_info(&stage, span, output_columns, output_sort_order))
}
