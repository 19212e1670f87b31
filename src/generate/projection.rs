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
    // Output columns are the expression aliases (or bare column names).
    let expr_names = node
        .property("expr")
        .map(properties::parse_expression_names)
        .unwrap_or_default();

    let detail = if expr_names.is_empty() {
        Vec::new()
    } else {
        vec![truncate_detail(&expr_names.join(", "))]
    };

    let stage = emit_stage(ctx, &node.operator, &detail, x, y);
    let child = generate_sole_child(node, &stage, ctx)?;

    let input_total = child.as_ref().map(|c| c.input_arrow_count).unwrap_or(0);
    let output_columns = if expr_names.is_empty() {
        child.as_ref().map(|c| c.output_columns.clone()).unwrap_or_default()
    } else {
        expr_names
    };
    let output_sort_order = child.map(|c| c.output_sort_order).unwrap_or_default();

    let span = arrows::output_positions(input_total, stage.x, stage.width);
    Ok(stage_info(&stage, span, output_columns, output_sort_order))
}
