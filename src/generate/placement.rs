//! Subtree placement shared by the n-ary and binary generators: children are
//! laid out left to right on one row, then the whole block is shifted once
//! to center under the parent after the true subtree widths are known.

use super::{GenerationContext, NodeInfo, StageBox, generate_node};
use crate::document::Element;
use crate::error::GenerateError;
use crate::plan::PlanNode;

/// Horizontal extent of a slice of elements. Arrows are measured by their
/// origin and width, which is close enough for row packing.
fn bounds(elements: &[Element]) -> Option<(f32, f32)> {
    let mut min_x = f32::MAX;
    let mut max_x = f32::MIN;
    for element in elements {
        let common = element.common();
        min_x = min_x.min(common.x);
        max_x = max_x.max(common.x + common.width);
    }
    if min_x <= max_x { Some((min_x, max_x)) } else { None }
}

fn shift_elements(elements: &mut [Element], dx: f32) {
    for element in elements {
        element.common_mut().x += dx;
    }
}

fn shift_info(info: &mut NodeInfo, dx: f32) {
    info.x += dx;
    for position in &mut info.input_arrow_positions {
        *position += dx;
    }
}

/// Generates all children of `node` on one row below `stage`, centered under
/// it. Arrows are NOT drawn here; callers connect each returned child to the
/// target region that fits the operator.
pub(super) fn generate_children_row(
    node: &PlanNode,
    stage: &StageBox,
    ctx: &mut GenerationContext,
) -> Result<Vec<NodeInfo>, GenerateError> {
    let row_y = stage.y + ctx.config.node_height + ctx.config.vertical_spacing;
    let row_start = ctx.elements.len();
    let mut infos: Vec<NodeInfo> = Vec::new();
    let mut cursor = stage.x;

    for child in &node.children {
        let child_start = ctx.elements.len();
        let info = generate_node(child, cursor, row_y, false, ctx)?;
        let subtree_max = bounds(&ctx.elements[child_start..])
            .map(|(_, max_x)| max_x)
            .unwrap_or(cursor + ctx.config.node_width);
        cursor = subtree_max + ctx.config.horizontal_spacing;
        infos.push(info);
    }

    if let Some((min_x, max_x)) = bounds(&ctx.elements[row_start..]) {
        let dx = stage.center_x() - (min_x + max_x) / 2.0;
        if dx != 0.0 {
            shift_elements(&mut ctx.elements[row_start..], dx);
            for info in &mut infos {
                shift_info(info, dx);
            }
        }
    }

    Ok(infos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiagramConfig;
    use crate::generate::emit_stage;
    use crate::id::IdGenerator;

    #[test]
    fn row_is_centered_under_parent() {
        let config = DiagramConfig::default();
        let mut ctx = GenerationContext {
            config: &config,
            ids: IdGenerator::new(),
            elements: Vec::new(),
        };
        let stage = emit_stage(&mut ctx, "UnionExec", &[], 0.0, 0.0);
        let node = PlanNode::new("UnionExec")
            .with_child(PlanNode::new("EmptyExec"))
            .with_child(PlanNode::new("EmptyExec"));
        let infos = generate_children_row(&node, &stage, &mut ctx).unwrap();
        assert_eq!(infos.len(), 2);

        let row_min = infos[0].x;
        let row_max = infos[1].x + infos[1].width;
        let row_center = (row_min + row_max) / 2.0;
        assert!((row_center - stage.center_x()).abs() < 1.0);
        // Both children share the row below the parent.
        assert_eq!(infos[0].y, infos[1].y);
        assert!(infos[0].y > stage.bottom());
    }
}
