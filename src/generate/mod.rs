//! Tree walk, operator dispatch, and the plumbing every generator shares.
//!
//! Generation is one synchronous depth-first pass: a generator draws its own
//! box, recurses into its children, draws the arrows child-to-parent, and
//! returns a [`NodeInfo`] describing its rectangle, output streams and
//! schema. All shapes land in the single element list owned by the
//! [`GenerationContext`].

use crate::arrows;
use crate::config::DiagramConfig;
use crate::document::{BoundElement, DiagramDocument, Element};
use crate::element::{self, FONT_FAMILY_CODE, FONT_FAMILY_LABEL, LINE_HEIGHT};
use crate::error::GenerateError;
use crate::id::IdGenerator;
use crate::labels::{self, LabelAnchor};
use crate::plan::PlanNode;

mod aggregate;
mod coalesce_batches;
mod coalesce_partitions;
mod cross_join;
mod empty;
mod filter;
mod global_limit;
mod hash_join;
mod local_limit;
mod placeholder_row;
mod placement;
mod projection;
mod repartition;
mod scan;
mod sort;
mod sort_merge_join;
mod sort_preserving_merge;
mod union;
mod unknown;

/// Per-node result, returned bottom-up.
///
/// `input_arrow_count` is the logical stream count a parent should account
/// for; `input_arrow_positions` are the rendered endpoint x-coordinates on
/// this node's top edge (possibly condensed, possibly empty — parents fall
/// back to an even distribution when unusable).
#[derive(Debug, Clone)]
pub struct NodeInfo {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element_id: String,
    pub input_arrow_count: usize,
    pub input_arrow_positions: Vec<f32>,
    pub output_columns: Vec<String>,
    pub output_sort_order: Vec<String>,
}

/// Shared state of one diagram build. Exactly one context exists per build
/// and is threaded by mutable reference through the whole recursion.
pub struct GenerationContext<'a> {
    pub config: &'a DiagramConfig,
    pub ids: IdGenerator,
    pub elements: Vec<Element>,
}

impl<'a> GenerationContext<'a> {
    fn new(config: &'a DiagramConfig) -> Self {
        Self {
            config,
            ids: IdGenerator::new(),
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) -> String {
        let id = element.id().to_string();
        self.elements.push(element);
        id
    }

    /// Pushes an arrow and records the back-reference on every shape it
    /// binds to, so the editor keeps the arrow attached when shapes move.
    pub fn push_arrow(&mut self, element: Element) -> String {
        let id = element.id().to_string();
        let mut bound_ids: Vec<String> = Vec::new();
        if let Element::Arrow(arrow) = &element {
            if let Some(binding) = &arrow.start_binding {
                bound_ids.push(binding.element_id.clone());
            }
            if let Some(binding) = &arrow.end_binding {
                bound_ids.push(binding.element_id.clone());
            }
        }
        self.elements.push(element);
        for target in bound_ids {
            if let Some(shape) = self.elements.iter_mut().find(|el| el.id() == target) {
                shape.common_mut().bound_elements.push(BoundElement {
                    id: id.clone(),
                    kind: "arrow".to_string(),
                });
            }
        }
        id
    }
}

/// Generates the complete document for one plan tree. Constructs a fresh
/// context (and therefore fresh deterministic counters) per call.
pub fn generate_document(
    plan: &PlanNode,
    config: &DiagramConfig,
) -> Result<DiagramDocument, GenerateError> {
    let mut ctx = GenerationContext::new(config);
    generate_node(plan, 0.0, 0.0, true, &mut ctx)?;
    Ok(DiagramDocument::new(ctx.elements))
}

/// Dispatch by operator tag. Unknown tags never fail; they render through
/// the generic fallback and propagate as a pass-through.
pub(crate) fn generate_node(
    node: &PlanNode,
    x: f32,
    y: f32,
    is_root: bool,
    ctx: &mut GenerationContext,
) -> Result<NodeInfo, GenerateError> {
    match node.operator.as_str() {
        "DataSourceExec" | "ParquetExec" | "CsvExec" => scan::generate(node, x, y, is_root, ctx),
        "FilterExec" => filter::generate(node, x, y, is_root, ctx),
        "ProjectionExec" => projection::generate(node, x, y, is_root, ctx),
        "SortExec" => sort::generate(node, x, y, is_root, ctx),
        "AggregateExec" => aggregate::generate(node, x, y, is_root, ctx),
        "CoalesceBatchesExec" => coalesce_batches::generate(node, x, y, is_root, ctx),
        "LocalLimitExec" => local_limit::generate(node, x, y, is_root, ctx),
        "GlobalLimitExec" => global_limit::generate(node, x, y, is_root, ctx),
        "RepartitionExec" => repartition::generate(node, x, y, is_root, ctx),
        "CoalescePartitionsExec" => coalesce_partitions::generate(node, x, y, is_root, ctx),
        "SortPreservingMergeExec" => sort_preserving_merge::generate(node, x, y, is_root, ctx),
        "UnionExec" => union::generate(node, x, y, is_root, ctx),
        "HashJoinExec" => hash_join::generate(node, x, y, is_root, ctx),
        "SortMergeJoinExec" => sort_merge_join::generate(node, x, y, is_root, ctx),
        "CrossJoinExec" => cross_join::generate(node, x, y, is_root, ctx),
        "EmptyExec" => empty::generate(node, x, y, is_root, ctx),
        "PlaceholderRowExec" => placeholder_row::generate(node, x, y, is_root, ctx),
        _ => unknown::generate(node, x, y, is_root, ctx),
    }
}

/// The rectangle (plus label/detail) drawn for one stage.
pub(crate) struct StageBox {
    pub rect_id: String,
    pub group_id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl StageBox {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

const TITLE_PADDING: f32 = 10.0;
const DETAIL_GAP: f32 = 6.0;

pub(crate) fn emit_stage(
    ctx: &mut GenerationContext,
    title: &str,
    detail: &[String],
    x: f32,
    y: f32,
) -> StageBox {
    let color = ctx.config.node_stroke_color.clone();
    emit_stage_with_color(ctx, title, &color, detail, x, y)
}

pub(crate) fn emit_stage_with_color(
    ctx: &mut GenerationContext,
    title: &str,
    title_color: &str,
    detail: &[String],
    x: f32,
    y: f32,
) -> StageBox {
    let config = ctx.config;
    let group = ctx.ids.group_id();
    let rect = element::rectangle(
        &mut ctx.ids,
        config,
        x,
        y,
        config.node_width,
        config.node_height,
        Some(&group),
    );
    let rect_id = ctx.push(rect);

    let center_x = x + config.node_width / 2.0;
    let title_element = element::centered_text(
        &mut ctx.ids,
        center_x,
        y + TITLE_PADDING,
        title,
        config.label_font_size,
        FONT_FAMILY_LABEL,
        title_color,
        Some(&group),
    );
    ctx.push(title_element);

    let detail_y = y + TITLE_PADDING + config.label_font_size * LINE_HEIGHT + DETAIL_GAP;
    if let Some(detail_element) =
        labels::detail_text_element(&mut ctx.ids, config, detail, center_x, detail_y, Some(&group))
    {
        ctx.push(detail_element);
    }

    StageBox {
        rect_id,
        group_id: group,
        x,
        y,
        width: config.node_width,
        height: config.node_height,
    }
}

/// Where a child's arrows land on its parent.
pub(crate) struct ArrowTarget<'a> {
    pub element_id: &'a str,
    pub region_x: f32,
    pub region_width: f32,
    pub y: f32,
}

impl<'a> ArrowTarget<'a> {
    pub fn bottom_edge(stage: &'a StageBox) -> Self {
        Self {
            element_id: &stage.rect_id,
            region_x: stage.x,
            region_width: stage.width,
            y: stage.bottom(),
        }
    }

    /// One of `slices` equal shares of the parent's bottom edge.
    pub fn bottom_slice(stage: &'a StageBox, index: usize, slices: usize) -> Self {
        let slices = slices.max(1);
        let slice_width = stage.width / slices as f32;
        Self {
            element_id: &stage.rect_id,
            region_x: stage.x + slice_width * index as f32,
            region_width: slice_width,
            y: stage.bottom(),
        }
    }
}

/// Rendered start positions for the arrows leaving `child`, applying the
/// even-distribution fallback when the reported positions are unusable and
/// flooring to a single centered arrow when the count resolved to zero.
pub(crate) fn resolved_start_positions(child: &NodeInfo) -> Vec<f32> {
    let mut starts = child.input_arrow_positions.clone();
    if starts.is_empty() && child.input_arrow_count > 0 {
        starts = arrows::output_positions(child.input_arrow_count, child.x, child.width).positions;
    }
    if starts.is_empty() {
        starts.push(child.x + child.width / 2.0);
    }
    starts
}

/// Draws the arrows from `child`'s top edge into `target`, the "…" marker
/// when the bundle is condensed, and the child's column labels beside the
/// bundle.
pub(crate) fn connect_child(
    ctx: &mut GenerationContext,
    child: &NodeInfo,
    target: &ArrowTarget,
    anchor: LabelAnchor,
) {
    let starts = resolved_start_positions(child);
    let ends = arrows::distribute(starts.len(), target.region_x, target.region_width);
    for (start_x, end_x) in starts.iter().zip(&ends) {
        let arrow = element::arrow(
            &mut ctx.ids,
            ctx.config,
            (*start_x, child.y),
            (*end_x, target.y),
            Some(&child.element_id),
            Some(target.element_id),
        );
        ctx.push_arrow(arrow);
    }

    let mid_y = (child.y + target.y) / 2.0;
    if child.input_arrow_count > starts.len() && starts.len() == 4 {
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

    let anchor_x = match anchor {
        LabelAnchor::RightOfArrows => starts
            .iter()
            .chain(ends.iter())
            .fold(f32::MIN, |acc, v| acc.max(*v)),
        LabelAnchor::LeftOfArrows => starts
            .iter()
            .chain(ends.iter())
            .fold(f32::MAX, |acc, v| acc.min(*v)),
    };
    let label_elements = labels::column_label_elements(
        &mut ctx.ids,
        ctx.config,
        &child.output_columns,
        &child.output_sort_order,
        anchor_x,
        mid_y,
        anchor,
    );
    for label in label_elements {
        ctx.push(label);
    }
}

/// Generates the first child stacked directly below `stage` and connects it
/// to the stage's full bottom edge. `None` when the node has no children.
pub(crate) fn generate_sole_child(
    node: &PlanNode,
    stage: &StageBox,
    ctx: &mut GenerationContext,
) -> Result<Option<NodeInfo>, GenerateError> {
    let Some(child) = node.children.first() else {
        return Ok(None);
    };
    let child_y = stage.y + ctx.config.node_height + ctx.config.vertical_spacing;
    let info = generate_node(child, stage.x, child_y, false, ctx)?;
    let target = ArrowTarget::bottom_edge(stage);
    connect_child(ctx, &info, &target, LabelAnchor::RightOfArrows);
    Ok(Some(info))
}

pub(crate) fn require_children(node: &PlanNode, expected: usize) -> Result<(), GenerateError> {
    if node.children.len() != expected {
        return Err(GenerateError::Cardinality {
            operator: node.operator.clone(),
            expected,
            actual: node.children.len(),
        });
    }
    Ok(())
}

/// Label side for a child connecting to `stage`, chosen by which side the
/// flow approaches from.
pub(crate) fn anchor_for(child: &NodeInfo, stage: &StageBox) -> LabelAnchor {
    if child.x + child.width / 2.0 < stage.center_x() {
        LabelAnchor::LeftOfArrows
    } else {
        LabelAnchor::RightOfArrows
    }
}

const DETAIL_MAX_CHARS: usize = 48;

/// Caps one detail line so degenerate property text cannot blow up a box.
pub(crate) fn truncate_detail(raw: &str) -> String {
    if raw.chars().count() <= DETAIL_MAX_CHARS {
        return raw.to_string();
    }
    let kept: String = raw.chars().take(DETAIL_MAX_CHARS).collect();
    format!("{kept}…")
}

/// Assembles the NodeInfo for a stage from its output span and schema.
pub(crate) fn stage_info(
    stage: &StageBox,
    span: arrows::ArrowSpan,
    output_columns: Vec<String>,
    output_sort_order: Vec<String>,
) -> NodeInfo {
    NodeInfo {
        x: stage.x,
        y: stage.y,
        width: stage.width,
        height: stage.height,
        element_id: stage.rect_id.clone(),
        input_arrow_count: span.full_count,
        input_arrow_positions: span.positions,
        output_columns,
        output_sort_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(groups: usize, projection: &str, ordering: &str) -> PlanNode {
        let group_lists: Vec<String> = (0..groups).map(|i| format!("[f{i}.parquet]")).collect();
        let mut node = PlanNode::new("DataSourceExec").with_property(
            "file_groups",
            format!("{{{groups} groups: [{}]}}", group_lists.join(", ")),
        );
        if !projection.is_empty() {
            node = node.with_property("projection", projection);
        }
        if !ordering.is_empty() {
            node = node.with_property("output_ordering", ordering);
        }
        node
    }

    fn run(node: &PlanNode, is_root: bool) -> Result<NodeInfo, GenerateError> {
        let config = DiagramConfig::default();
        let mut ctx = GenerationContext::new(&config);
        generate_node(node, 0.0, 0.0, is_root, &mut ctx)
    }

    #[test]
    fn scan_reports_file_group_fan_out_and_schema() {
        let node = scan(3, "[a@0, b@1]", "[a@0 ASC]");
        let info = run(&node, true).unwrap();
        assert_eq!(info.input_arrow_count, 3);
        assert_eq!(info.input_arrow_positions.len(), 3);
        assert_eq!(info.output_columns, vec!["a", "b"]);
        assert_eq!(info.output_sort_order, vec!["a"]);
    }

    #[test]
    fn scan_without_properties_degrades_to_zero() {
        let info = run(&PlanNode::new("DataSourceExec"), true).unwrap();
        assert_eq!(info.input_arrow_count, 0);
        assert!(info.input_arrow_positions.is_empty());
        assert!(info.output_columns.is_empty());
    }

    #[test]
    fn identity_operators_pass_the_fan_out_through() {
        for operator in [
            "FilterExec",
            "ProjectionExec",
            "CoalesceBatchesExec",
            "LocalLimitExec",
        ] {
            let node = PlanNode::new(operator).with_child(scan(3, "[a@0]", ""));
            let info = run(&node, true).unwrap();
            assert_eq!(info.input_arrow_count, 3, "{operator}");
        }
    }

    #[test]
    fn filter_inherits_schema_and_keeps_order() {
        let node = PlanNode::new("FilterExec")
            .with_property("predicate", "b@1 > 10")
            .with_child(scan(2, "[a@0, b@1]", "[a@0 ASC]"));
        let info = run(&node, true).unwrap();
        assert_eq!(info.output_columns, vec!["a", "b"]);
        assert_eq!(info.output_sort_order, vec!["a"]);
    }

    #[test]
    fn projection_renames_through_aliases() {
        let node = PlanNode::new("ProjectionExec")
            .with_property("expr", "[a@0 as key, b@1]")
            .with_child(scan(1, "[a@0, b@1]", ""));
        let info = run(&node, true).unwrap();
        assert_eq!(info.output_columns, vec!["key", "b"]);
    }

    #[test]
    fn sort_defines_the_output_order() {
        let node = PlanNode::new("SortExec")
            .with_property("expr", "[b@1 ASC NULLS LAST, a@0 DESC]")
            .with_child(scan(2, "[a@0, b@1]", "[a@0 ASC]"));
        let info = run(&node, true).unwrap();
        assert_eq!(info.output_sort_order, vec!["b", "a"]);
    }

    #[test]
    fn aggregate_promotes_binned_column_after_its_source() {
        let node = PlanNode::new("AggregateExec")
            .with_property("mode", "Partial")
            .with_property("gby", "[ts@0 as ts, date_bin(3600, ts@0, 0) as bucket]")
            .with_property("aggr", "[count(v@1)]")
            .with_child(scan(1, "[ts@0, v@1]", "[ts@0 ASC]"));
        let info = run(&node, true).unwrap();
        assert_eq!(info.output_columns, vec!["ts", "bucket", "count(v)"]);
        assert_eq!(info.output_sort_order, vec!["ts", "bucket"]);
    }

    #[test]
    fn aggregate_without_expressions_falls_back_to_child_columns() {
        let node = PlanNode::new("AggregateExec").with_child(scan(1, "[a@0]", ""));
        let info = run(&node, true).unwrap();
        assert_eq!(info.output_columns, vec!["a"]);
    }

    #[test]
    fn repartition_fan_out_comes_from_the_partitioning_spec() {
        let node = PlanNode::new("RepartitionExec")
            .with_property("partitioning", "Hash([a@0, b@1], 4)")
            .with_child(scan(2, "[a@0, b@1]", ""));
        let info = run(&node, false).unwrap();
        assert_eq!(info.input_arrow_count, 4);
        assert_eq!(info.input_arrow_positions.len(), 4);
    }

    #[test]
    fn repartition_at_the_root_is_forced_to_zero() {
        let node = PlanNode::new("RepartitionExec")
            .with_property("partitioning", "Hash([a@0], 4)")
            .with_child(scan(2, "[a@0]", ""));
        let info = run(&node, true).unwrap();
        assert_eq!(info.input_arrow_count, 0);
        assert!(info.input_arrow_positions.is_empty());
    }

    #[test]
    fn repartition_unparseable_spec_falls_back_to_input_total() {
        let node = PlanNode::new("RepartitionExec")
            .with_property("partitioning", "UnknownPartitioning(weird)")
            .with_child(scan(3, "[a@0]", ""));
        let info = run(&node, false).unwrap();
        assert_eq!(info.input_arrow_count, 3);
    }

    #[test]
    fn repartition_preserves_order_for_single_sorted_input_partition() {
        let node = PlanNode::new("RepartitionExec")
            .with_property("partitioning", "RoundRobinBatch(4)")
            .with_property("preserve_order", "true")
            .with_child(scan(1, "[a@0]", "[a@0 ASC]"));
        let info = run(&node, false).unwrap();
        assert_eq!(info.output_sort_order, vec!["a"]);

        // Same shape, flag absent, several input partitions: order is gone.
        let node = PlanNode::new("RepartitionExec")
            .with_property("partitioning", "RoundRobinBatch(4)")
            .with_child(scan(2, "[a@0]", "[a@0 ASC]"));
        let info = run(&node, false).unwrap();
        assert!(info.output_sort_order.is_empty());
    }

    #[test]
    fn repartition_other_schemes_keep_the_order() {
        let node = PlanNode::new("RepartitionExec")
            .with_property("partitioning", "UnknownPartitioning(2)")
            .with_child(scan(2, "[a@0]", "[a@0 ASC]"));
        let info = run(&node, false).unwrap();
        assert_eq!(info.output_sort_order, vec!["a"]);
    }

    #[test]
    fn merging_operators_resolve_to_one_stream() {
        for operator in ["CoalescePartitionsExec", "SortPreservingMergeExec"] {
            let node = PlanNode::new(operator).with_child(scan(5, "[a@0]", ""));
            let info = run(&node, true).unwrap();
            assert_eq!(info.input_arrow_count, 1, "{operator}");
        }
    }

    #[test]
    fn union_sums_streams_and_takes_first_child_schema() {
        let node = PlanNode::new("UnionExec")
            .with_child(scan(2, "[x@0]", "[x@0 ASC]"))
            .with_child(scan(3, "[x@0]", ""));
        let info = run(&node, true).unwrap();
        assert_eq!(info.input_arrow_count, 5);
        assert_eq!(info.output_columns, vec!["x"]);
        assert_eq!(info.output_sort_order, vec!["x"]);
    }

    #[test]
    fn hash_join_follows_the_probe_side() {
        let node = PlanNode::new("HashJoinExec")
            .with_property("join_type", "Inner")
            .with_property("on", "[(bk@0, pk@0)]")
            .with_child(scan(1, "[bk@0, bv@1]", ""))
            .with_child(scan(4, "[pk@0, pv@1]", "[pk@0 ASC]"));
        let info = run(&node, true).unwrap();
        assert_eq!(info.input_arrow_count, 4);
        assert_eq!(info.output_columns, vec!["pk", "pv"]);
        assert_eq!(info.output_sort_order, vec!["pk"]);
    }

    #[test]
    fn hash_join_projection_overrides_probe_columns() {
        let node = PlanNode::new("HashJoinExec")
            .with_property("on", "[(bk@0, pk@0)]")
            .with_property("projection", "[bk@0, pv@1]")
            .with_child(scan(1, "[bk@0]", ""))
            .with_child(scan(1, "[pk@0, pv@1]", ""));
        let info = run(&node, true).unwrap();
        assert_eq!(info.output_columns, vec!["bk", "pv"]);
    }

    #[test]
    fn hash_join_wrong_child_count_is_fatal() {
        let one = PlanNode::new("HashJoinExec").with_child(scan(1, "", ""));
        assert!(matches!(
            run(&one, true),
            Err(GenerateError::Cardinality { expected: 2, actual: 1, .. })
        ));

        let three = PlanNode::new("HashJoinExec")
            .with_child(scan(1, "", ""))
            .with_child(scan(1, "", ""))
            .with_child(scan(1, "", ""));
        assert!(matches!(
            run(&three, true),
            Err(GenerateError::Cardinality { expected: 2, actual: 3, .. })
        ));
    }

    #[test]
    fn sort_merge_join_requires_matching_stream_counts() {
        let node = PlanNode::new("SortMergeJoinExec")
            .with_property("on", "[(a@0, b@0)]")
            .with_child(scan(3, "[a@0]", ""))
            .with_child(scan(4, "[b@0]", ""));
        assert!(matches!(
            run(&node, true),
            Err(GenerateError::StreamCountMismatch { left: 3, right: 4 })
        ));
    }

    #[test]
    fn sort_merge_join_orders_by_join_keys() {
        let node = PlanNode::new("SortMergeJoinExec")
            .with_property("on", "[(a@0, b@0)]")
            .with_child(scan(2, "[a@0, v@1]", ""))
            .with_child(scan(2, "[b@0, v@1]", ""));
        let info = run(&node, true).unwrap();
        assert_eq!(info.input_arrow_count, 2);
        assert_eq!(info.output_columns, vec!["a", "v", "b"]);
        assert_eq!(info.output_sort_order, vec!["a"]);
    }

    #[test]
    fn cross_join_forwards_the_larger_side() {
        let node = PlanNode::new("CrossJoinExec")
            .with_child(scan(2, "[a@0]", "[a@0 ASC]"))
            .with_child(scan(3, "[b@0]", ""));
        let info = run(&node, true).unwrap();
        assert_eq!(info.input_arrow_count, 3);
        assert_eq!(info.output_columns, vec!["a", "b"]);
        assert!(info.output_sort_order.is_empty());
    }

    #[test]
    fn global_limit_validates_cardinality_and_arity() {
        let no_child = PlanNode::new("GlobalLimitExec");
        assert!(matches!(
            run(&no_child, true),
            Err(GenerateError::Cardinality { expected: 1, actual: 0, .. })
        ));

        let wide = PlanNode::new("GlobalLimitExec")
            .with_property("fetch", "10")
            .with_child(scan(2, "[a@0]", ""));
        assert!(matches!(
            run(&wide, true),
            Err(GenerateError::SingleStreamRequired { actual: 2, .. })
        ));

        let valid = PlanNode::new("GlobalLimitExec")
            .with_property("skip", "0")
            .with_property("fetch", "10")
            .with_child(scan(1, "[a@0]", "[a@0 ASC]"));
        let info = run(&valid, true).unwrap();
        assert_eq!(info.input_arrow_count, 1);
        assert_eq!(info.output_sort_order, vec!["a"]);
    }

    #[test]
    fn unknown_operator_renders_and_passes_through() {
        let node = PlanNode::new("MysteryExec")
            .with_child(scan(2, "[a@0]", "[a@0 ASC]"));
        let info = run(&node, true).unwrap();
        assert_eq!(info.input_arrow_count, 2);
        assert_eq!(info.output_columns, vec!["a"]);
        assert_eq!(info.output_sort_order, vec!["a"]);
    }

    #[test]
    fn condensed_child_still_reports_full_count() {
        let node = PlanNode::new("FilterExec").with_child(scan(20, "[a@0]", ""));
        let info = run(&node, true).unwrap();
        assert_eq!(info.input_arrow_count, 20);
    }
}
