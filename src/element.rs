//! Construction of the four primitive shapes with consistent styling.
//!
//! Every element flows through one of these builders so defaults (roughness,
//! opacity, stroke widths, fonts) stay uniform across the document.

use crate::config::DiagramConfig;
use crate::document::{
    ArrowElement, Binding, Element, ElementCommon, Roundness, ShapeElement, TextElement,
};
use crate::id::IdGenerator;
use crate::text_metrics;

pub const FONT_FAMILY_LABEL: u8 = 2;
pub const FONT_FAMILY_CODE: u8 = 3;
pub const LINE_HEIGHT: f32 = 1.25;

const SHAPE_STROKE_WIDTH: f32 = 2.0;
const ARROW_STROKE_WIDTH: f32 = 1.5;
const RECTANGLE_ROUNDNESS: u8 = 3;
const ARROW_ROUNDNESS: u8 = 2;
const BINDING_GAP: f32 = 1.0;

fn common(
    ids: &mut IdGenerator,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    stroke_color: &str,
    stroke_width: f32,
    group: Option<&str>,
) -> ElementCommon {
    ElementCommon {
        id: ids.element_id(),
        x,
        y,
        width,
        height,
        angle: 0.0,
        stroke_color: stroke_color.to_string(),
        background_color: "transparent".to_string(),
        fill_style: "solid".to_string(),
        stroke_width,
        stroke_style: "solid".to_string(),
        roughness: 0,
        opacity: 100,
        group_ids: group.map(|id| vec![id.to_string()]).unwrap_or_default(),
        frame_id: None,
        index: ids.z_index(),
        roundness: None,
        seed: ids.seed(),
        version: 1,
        version_nonce: ids.nonce(),
        is_deleted: false,
        bound_elements: Vec::new(),
        updated: ids.timestamp(),
        link: None,
        locked: false,
    }
}

pub fn rectangle(
    ids: &mut IdGenerator,
    config: &DiagramConfig,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    group: Option<&str>,
) -> Element {
    let mut base = common(
        ids,
        x,
        y,
        width,
        height,
        &config.node_stroke_color,
        SHAPE_STROKE_WIDTH,
        group,
    );
    base.roundness = Some(Roundness {
        kind: RECTANGLE_ROUNDNESS,
    });
    Element::Rectangle(ShapeElement { common: base })
}

pub fn ellipse(
    ids: &mut IdGenerator,
    config: &DiagramConfig,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    group: Option<&str>,
) -> Element {
    let base = common(
        ids,
        x,
        y,
        width,
        height,
        &config.node_stroke_color,
        SHAPE_STROKE_WIDTH,
        group,
    );
    Element::Ellipse(ShapeElement { common: base })
}

/// Left-anchored text at `(x, y)` (top-left corner).
pub fn text(
    ids: &mut IdGenerator,
    x: f32,
    y: f32,
    content: &str,
    font_size: f32,
    font_family: u8,
    color: &str,
    group: Option<&str>,
) -> Element {
    let (width, height) = text_metrics::block_size(content, font_size, LINE_HEIGHT);
    let base = common(ids, x, y, width, height, color, 1.0, group);
    Element::Text(TextElement {
        common: base,
        text: content.to_string(),
        font_size,
        font_family,
        text_align: "left".to_string(),
        vertical_align: "top".to_string(),
        container_id: None,
        original_text: content.to_string(),
        auto_resize: true,
        line_height: LINE_HEIGHT,
    })
}

/// Text centered horizontally on `center_x`, top edge at `y`.
pub fn centered_text(
    ids: &mut IdGenerator,
    center_x: f32,
    y: f32,
    content: &str,
    font_size: f32,
    font_family: u8,
    color: &str,
    group: Option<&str>,
) -> Element {
    let (width, height) = text_metrics::block_size(content, font_size, LINE_HEIGHT);
    let base = common(ids, center_x - width / 2.0, y, width, height, color, 1.0, group);
    Element::Text(TextElement {
        common: base,
        text: content.to_string(),
        font_size,
        font_family,
        text_align: "center".to_string(),
        vertical_align: "top".to_string(),
        container_id: None,
        original_text: content.to_string(),
        auto_resize: true,
        line_height: LINE_HEIGHT,
    })
}

/// Arrow from `start` to `end` bound to the given element IDs. Points are
/// stored relative to the arrow's own origin, as the editor expects.
pub fn arrow(
    ids: &mut IdGenerator,
    config: &DiagramConfig,
    start: (f32, f32),
    end: (f32, f32),
    start_element: Option<&str>,
    end_element: Option<&str>,
) -> Element {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let mut base = common(
        ids,
        start.0,
        start.1,
        dx.abs(),
        dy.abs(),
        &config.arrow_stroke_color,
        ARROW_STROKE_WIDTH,
        None,
    );
    base.roundness = Some(Roundness {
        kind: ARROW_ROUNDNESS,
    });
    Element::Arrow(ArrowElement {
        common: base,
        points: vec![[0.0, 0.0], [dx, dy]],
        last_committed_point: None,
        start_binding: start_element.map(|id| Binding {
            element_id: id.to_string(),
            focus: 0.0,
            gap: BINDING_GAP,
        }),
        end_binding: end_element.map(|id| Binding {
            element_id: id.to_string(),
            focus: 0.0,
            gap: BINDING_GAP,
        }),
        start_arrowhead: None,
        end_arrowhead: Some("arrow".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_carries_config_stroke() {
        let mut ids = IdGenerator::new();
        let config = DiagramConfig::default();
        let element = rectangle(&mut ids, &config, 0.0, 0.0, 240.0, 90.0, Some("grp-0001"));
        let base = element.common();
        assert_eq!(base.stroke_color, config.node_stroke_color);
        assert_eq!(base.group_ids, vec!["grp-0001".to_string()]);
        assert!(base.roundness.is_some());
    }

    #[test]
    fn arrow_points_are_relative() {
        let mut ids = IdGenerator::new();
        let config = DiagramConfig::default();
        let element = arrow(
            &mut ids,
            &config,
            (100.0, 200.0),
            (120.0, 80.0),
            Some("child"),
            Some("parent"),
        );
        let Element::Arrow(arrow) = &element else {
            panic!("expected arrow");
        };
        assert_eq!(arrow.points, vec![[0.0, 0.0], [20.0, -120.0]]);
        assert_eq!(arrow.common.x, 100.0);
        assert_eq!(
            arrow.start_binding.as_ref().unwrap().element_id,
            "child".to_string()
        );
        assert_eq!(arrow.end_arrowhead.as_deref(), Some("arrow"));
    }

    #[test]
    fn centered_text_is_centered() {
        let mut ids = IdGenerator::new();
        let element = centered_text(
            &mut ids,
            100.0,
            0.0,
            "abc",
            14.0,
            FONT_FAMILY_LABEL,
            "#1e1e1e",
            None,
        );
        let base = element.common();
        assert!((base.x + base.width / 2.0 - 100.0).abs() < 1e-3);
    }
}
