//! `HashJoinExec`: build side (first child) feeds a small hash-structure
//! ellipse; the probe side (second child) connects straight to the join box
//! and determines the output fan-out and schema.

use super::{ArrowTarget, GenerationContext, NodeInfo, connect_child, emit_stage, placement,
    require_children, resolved_start_positions, stage_info, truncate_detail};
use crate::arrows;
use crate::element::{self, FONT_FAMILY_CODE, LINE_HEIGHT};
use crate::error::GenerateError;
use crate::geometry;
use crate::labels::{self, LabelAnchor};
use crate::plan::PlanNode;
use crate::properties;

const ELLIPSE_WIDTH: f32 = 110.0;
const ELLIPSE_HEIGHT: f32 = 56.0;

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
    let build = children.next().expect("child count validated above");
    let probe = children.next().expect("child count validated above");

    // Hash structure between the build side and the join box. Arrows anchor
    // on the ellipse boundary, not a rectangle edge.
    let build_top = (build.x + build.width / 2.0, build.y);
    let join_left = (stage.x + stage.width / 4.0, stage.bottom());
    let center = geometry::midpoint(build_top, join_left);
    let group = stage.group_id.clone();
    let ellipse = element::ellipse(
        &mut ctx.ids,
        ctx.config,
        center.0 - ELLIPSE_WIDTH / 2.0,
        center.1 - ELLIPSE_HEIGHT / 2.0,
        ELLIPSE_WIDTH,
        ELLIPSE_HEIGHT,
        Some(&group),
    );
    let ellipse_id = ctx.push(ellipse);

    connect_build_side(ctx, &build, &ellipse_id, center);

    let probe_target = ArrowTarget::bottom_slice(&stage, 1, 2);
    connect_child(ctx, &probe, &probe_target, LabelAnchor::RightOfArrows);

    let output_columns = match node.property("projection") {
        Some(raw) => properties::parse_column_list(raw),
        None => probe.output_columns,
    };
    let span = arrows::output_positions(probe.input_arrow_count, stage.x, stage.width);
    Ok(stage_info(&stage, span, output_columns, probe.output_sort_order))
}

fn connect_build_side(
    ctx: &mut GenerationContext,
    build: &NodeInfo,
    ellipse_id: &str,
    center: (f32, f32),
) {
    let starts = resolved_start_positions(build);
    for start_x in &starts {
        let start = (*start_x, build.y);
        let end = geometry::ellipse_edge_point(start, center, ELLIPSE_WIDTH, ELLIPSE_HEIGHT);
        let arrow = element::arrow(
            &mut ctx.ids,
            ctx.config,
            start,
            end,
            Some(&build.element_id),
            Some(ellipse_id),
        );
        ctx.push_arrow(arrow);
    }

    let mid_y = (build.y + center.1) / 2.0;
    if build.input_arrow_count > starts.len() && starts.len() == 4 {
        let ellipsis_x = (starts[1] + starts[2]) / 2.0;
        let marker = element::centered_text(
            &mut ctx.ids,
            ellipsis_x,
            mid_y - ctx.config.font_size * LINE_HEIGHT / 2.0,
            "…",
            ctx.config.font_size,
            FONT_FAMILY_CODE,
            &ctx.config.arrow_stroke_color,
            None,
        );
        ctx.push(marker);
    }

    let leftmost = starts.iter().fold(f32::MAX, |acc, v| acc.min(*v));
    let label_elements = labels::column_label_elements(
        &mut ctx.ids,
        ctx.config,
        &build.output_columns,
        &build.output_sort_order,
        leftmost,
        mid_y,
        LabelAnchor::LeftOfArrows,
    );
    for label in label_elements {
        ctx.push(label);
    }
}
