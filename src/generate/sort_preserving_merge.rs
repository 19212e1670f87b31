use super::{GenerationContext, NodeInfo, emit_stage, generate_sole_child, stage_info, truncate_detail};
use crate::arrows;
use crate::error::GenerateError;
use crate::plan::PlanNode;
use crate::properties;

/// `SortPreservingMergeExec` merges every sorted input stream into a single
/// stream ordered by its expression list.
pub(super) fn generate(
    node: &PlanNode,
    x: f32,
    y: f32,
    _is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    let expr = node.property("expr");
    let detail: Vec<String> = expr
        .map(|raw| vec![truncate_detail(&properties::display_sort_expressions(raw))])
        .unwrap_or_default();

    let stage = emit_stage(ctx, &node.operator, &detail, x, y);
    let child = generate_sole_child(node, &stage, ctx)?;

    let output_columns = child.map(|c| c.output_columns).unwrap_or_default();
    let output_sort_order = expr.map(properties::parse_sort_expressions).unwrap_or_default();

    let span = arrows::output_positions(1, stage.x, stage.width);
    Ok(stage_info(&stage, span, output_columns, output_sort_order))
}
