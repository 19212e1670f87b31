use super::{GenerationContext, NodeInfo, emit_stage, generate_sole_child, stage_info};
use crate::arrows;
use crate::error::GenerateError;
use crate::labels;
use crate::plan::PlanNode;
use crate::properties;

pub(super) fn generate(
    node: &PlanNode,
    x: f32,
    y: f32,
    _is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    let detail: Vec<String> = node
        .property("predicate")
        .map(|predicate| labels::wrap_detail(&properties::strip_ordinals(predicate)))
        .unwrap_or_default();

    let stage = emit_stage(ctx, &node.operator, &detail, x, y);
    let child = generate_sole_child(node, &stage, ctx)?;

    let input_total = child.as_ref().map(|c| c.input_arrow_count).unwrap_or(0);
    // A filter can carry an embedded projection that narrows its output.
    let output_columns = match node.property("projection") {
        Some(raw) => properties::parse_column_list(raw),
        None => child.as_ref().map(|c| c.output_columns.clone()).unwrap_or_default(),
    };
    let output_sort_order = child.map(|c| c.output_sort_order).unwrap_or_default();

    let span = arrows::output_positions(input_total, stage.x, stage.width);
    Ok(stage_info(&stage, span, output_columns, output_sort_order))
}
