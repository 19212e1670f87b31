//! `CrossJoinExec`: no key pairing and no stream-parity requirement; the
//! larger side's fan-out carries downstream and any inherited ordering is
//! destroyed by the product.

use super::{ArrowTarget, GenerationContext, NodeInfo, connect_child, emit_stage, placement,
    require_children, stage_info};
use crate::arrows;
use crate::error::GenerateError;
use crate::labels::LabelAnchor;
use crate::plan::PlanNode;

pub(super) fn generate(
    node: &PlanNode,
    x: f32,
    y: f32,
    _is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    require_children(node, 2)?;

    let stage = emit_stage(ctx, &node.operator, &[], x, y);
    let children = placement::generate_children_row(node, &stage, ctx)?;
    let mut children = children.into_iter();
    let left = children.next().expect("child count validated above");
    let right = children.next().expect("child count validated above");

    let left_target = ArrowTarget::bottom_slice(&stage, 0, 2);
    connect_child(ctx, &left, &left_target, LabelAnchor::LeftOfArrows);
    let right_target = ArrowTarget::bottom_slice(&stage, 1, 2);
    connect_child(ctx, &right, &right_target, LabelAnchor::RightOfArrows);

    let mut output_columns = left.output_columns;
    for column in right.output_columns {
        if !output_columns.contains(&column) {
            output_columns.push(column);
        }
    }

    let output_count = left.input_arrow_count.max(right.input_arrow_count);
    let span = arrows::output_positions(output_count, stage.x, stage.width);
    Ok(stage_info(&stage, span, output_columns, Vec::new()))
}
