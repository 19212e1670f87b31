use super::{GenerationContext, NodeInfo, emit_stage, stage_info};
use crate::arrows;
use crate::error::GenerateError;
use crate::plan::PlanNode;

/// `EmptyExec`: a zero-row source with a single output stream.
pub(super) fn generate(
    node: &PlanNode,
    x: f32,
    y: f32,
    _is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    let stage = emit_stage(ctx, &node.operator, &[], x, y);
    let span = arrows::output_positions(1, stage.x, stage.width);
    Ok(stage_info(&stage, span, Vec::new(), Vec::new()))
}
