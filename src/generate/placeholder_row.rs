use super::{GenerationContext, NodeInfo, emit_stage, stage_info};
use crate::arrows;
use crate::error::GenerateError;
use crate::plan::PlanNode;

/// `PlaceholderRowExec`: emits exactly one synthetic row on one stream.
pub(super) fn generate(
    node: &PlanNode,
    x: f32,
    y: f32,
    _is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    let detail = vec!["1 row".to_string()];
    let stage = emit_stage(ctx, &node.operator, &detail, x, y);
    let span = arrows::output_positions(1, stage.x, stage.width);
    Ok(stage_info(&stage, span, Vec::new(), Vec::new()))
}
