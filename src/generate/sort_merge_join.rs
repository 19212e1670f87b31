//! `SortMergeJoinExec`: both sides connect straight to the join box. The
//! merge walks both sides stream-by-stream, so the two fan-outs must agree;
//! a mismatch means the plan (or its parse) is inconsistent.

use super::{ArrowTarget, GenerationContext, NodeInfo, connect_child, emit_stage, placement,
    require_children, stage_info, truncate_detail};
use crate::arrows;
use crate::error::GenerateError;
use crate::labels::LabelAnchor;
use crate::plan::PlanNode;
use crate::properties;

pub(super) fn generate(
    node: &PlanNode,
    x: f32,
    y: f32,
    _is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    require_children(node, 2)?;

    let join_keys = node.property("on").map(properties::parse_join_keys).unwrap_or_default();
    let mut detail = Vec::new();
    if let Some(join_type) = node.property("join_type") {
        detail.push(format!("join_type={join_type}"));
    }
    if !join_keys.is_empty() {
        let pairs: Vec<String> = join_keys
            .iter()
            .map(|(left, right)| format!("{left} = {right}"))
            .collect();
        detail.push(truncate_detail(&format!("on: {}", pairs.join(", "))));
    }

    let stage = emit_stage(ctx, &node.operator, &detail, x, y);
    let children = placement::generate_children_row(node, &stage, ctx)?;
    let mut children = children.into_iter();
    let left = children.next().expect("child count validated above");
    let right = children.next().expect("child count validated above");

    if left.input_arrow_count != right.input_arrow_count {
        return Err(GenerateError::StreamCountMismatch {
            left: left.input_arrow_count,
            right: right.input_arrow_count,
        });
    }

    let left_target = ArrowTarget::bottom_slice(&stage, 0, 2);
    connect_child(ctx, &left, &left_target, LabelAnchor::LeftOfArrows);
    let right_target = ArrowTarget::bottom_slice(&stage, 1, 2);
    connect_child(ctx, &right, &right_target, LabelAnchor::RightOfArrows);

    // Deduplicated union of both schemas, left side first.
    let mut output_columns = left.output_columns;
    for column in right.output_columns {
        if !output_columns.contains(&column) {
            output_columns.push(column);
        }
    }

    // The merge emits rows ordered by the join keys.
    let mut output_sort_order: Vec<String> = Vec::new();
    for (left_key, _) in &join_keys {
        if !output_sort_order.contains(left_key) {
            output_sort_order.push(left_key.clone());
        }
    }

    let span = arrows::output_positions(left.input_arrow_count, stage.x, stage.width);
    Ok(stage_info(&stage, span, output_columns, output_sort_order))
}
