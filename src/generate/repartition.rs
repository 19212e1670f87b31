//! `RepartitionExec`: the output fan-out comes from the partitioning spec,
//! not from the input. Hash and round-robin repartitioning scramble stream
//! order, so the inherited sort order survives only with an explicit
//! `preserve_order` flag or a single input partition.

use super::{GenerationContext, NodeInfo, emit_stage, generate_sole_child, stage_info};
use crate::arrows::{self, ArrowSpan};
use crate::error::GenerateError;
use crate::plan::PlanNode;
use crate::properties::{self, Partitioning};

pub(super) fn generate(
    node: &PlanNode,
    x: f32,
    y: f32,
    is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    let partitioning = node.property("partitioning").map(properties::parse_partitioning);

    let detail: Vec<String> = partitioning
        .as_ref()
        .map(|p| vec![p.display()])
        .unwrap_or_default();

    let stage = emit_stage(ctx, &node.operator, &detail, x, y);
    let child = generate_sole_child(node, &stage, ctx)?;

    let input_total = child.as_ref().map(|c| c.input_arrow_count).unwrap_or(0);
    let output_count = partitioning
        .as_ref()
        .and_then(Partitioning::count)
        .unwrap_or(input_total);

    let preserve_flag = node
        .property("preserve_order")
        .map(|value| value == "true")
        .unwrap_or(false);
    let inherited_sort = child.as_ref().map(|c| c.output_sort_order.clone()).unwrap_or_default();
    let output_sort_order = match partitioning {
        Some(Partitioning::Hash { .. }) | Some(Partitioning::RoundRobin { .. }) => {
            if preserve_flag || input_total == 1 {
                inherited_sort
            } else {
                Vec::new()
            }
        }
        _ => inherited_sort,
    };
    let output_columns = child.map(|c| c.output_columns).unwrap_or_default();

    // The root has no parent to receive its streams.
    let span = if is_root {
        ArrowSpan::empty()
    } else {
        arrows::output_positions(output_count, stage.x, stage.width)
    };
    Ok(stage_info(&stage, span, output_columns, output_sort_order))
}
