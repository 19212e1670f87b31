use super::{GenerationContext, NodeInfo, emit_stage, generate_sole_child, stage_info};
use crate::arrows;
use crate::error::GenerateError;
use crate::plan::PlanNode;

/// `CoalescePartitionsExec` funnels every input stream into one.
pub(super) fn generate(
    node: &PlanNode,
    x: f32,
    y: f32,
    _is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    let stage = emit_stage(ctx, &node.operator, &[], x, y);
    let child = generate_sole_child(node, &stage, ctx)?;

    let (output_columns, output_sort_order) = child
        .map(|c| (c.output_columns, c.output_sort_order))
        .unwrap_or_default();

    let span = arrows::output_positions(1, stage.x, stage.width);
    Ok(stage_info(&stage, span, output_columns, output_sort_order))
}
