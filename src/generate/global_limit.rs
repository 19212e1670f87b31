use super::{GenerationContext, NodeInfo, emit_stage, generate_sole_child, require_children, stage_info};
use crate::arrows;
use crate::error::GenerateError;
use crate::plan::PlanNode;

/// `GlobalLimitExec` is only correct over a single merged stream: exactly
/// one child, and that child must resolve to exactly one input arrow.
pub(super) fn generate(
    node: &PlanNode,
    x: f32,
    y: f32,
    _is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    require_children(node, 1)?;

    let mut detail = Vec::new();
    if let Some(skip) = node.property("skip") {
        detail.push(format!("skip={skip}"));
    }
    if let Some(fetch) = node.property("fetch") {
        detail.push(format!("fetch={fetch}"));
    }

    let stage = emit_stage(ctx, &node.operator, &detail, x, y);
    let child = generate_sole_child(node, &stage, ctx)?.expect("child count validated above");

    if child.input_arrow_count != 1 {
        return Err(GenerateError::SingleStreamRequired {
            operator: node.operator.clone(),
            actual: child.input_arrow_count,
        });
    }

    let span = arrows::output_positions(1, stage.x, stage.width);
    Ok(stage_info(&stage, span, child.output_columns, child.output_sort_order))
}
