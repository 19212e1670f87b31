//! Serde model of the Excalidraw file schema.
//!
//! The editor is strict about shape: `locked`, `isDeleted`, `version`,
//! `versionNonce`, `seed`, `updated`, `boundElements`, `frameId` and
//! `roundness` must all be present on every element, and arrows must carry
//! explicit start/end bindings for shapes to stay attached when moved.

use serde::Serialize;
use std::collections::BTreeMap;

pub const DOCUMENT_TYPE: &str = "excalidraw";
pub const DOCUMENT_VERSION: u32 = 2;
pub const DOCUMENT_SOURCE: &str = "https://github.com/planshape/planshape";
pub const BACKGROUND_COLOR: &str = "#ffffff";

/// Root of the generated file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: u32,
    pub source: String,
    pub elements: Vec<Element>,
    pub app_state: AppState,
    pub files: BTreeMap<String, serde_json::Value>,
}

impl DiagramDocument {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            kind: DOCUMENT_TYPE.to_string(),
            version: DOCUMENT_VERSION,
            source: DOCUMENT_SOURCE.to_string(),
            elements,
            app_state: AppState::default(),
            files: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub grid_size: Option<u32>,
    pub background_color: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            grid_size: None,
            background_color: BACKGROUND_COLOR.to_string(),
        }
    }
}

/// Fields shared by every element kind.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementCommon {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub angle: f32,
    pub stroke_color: String,
    pub background_color: String,
    pub fill_style: String,
    pub stroke_width: f32,
    pub stroke_style: String,
    pub roughness: u8,
    pub opacity: u8,
    pub group_ids: Vec<String>,
    pub frame_id: Option<String>,
    pub index: String,
    pub roundness: Option<Roundness>,
    pub seed: u32,
    pub version: u32,
    pub version_nonce: u32,
    pub is_deleted: bool,
    pub bound_elements: Vec<BoundElement>,
    pub updated: u64,
    pub link: Option<String>,
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Roundness {
    #[serde(rename = "type")]
    pub kind: u8,
}

/// Back-reference from a shape to an arrow bound to it.
#[derive(Debug, Clone, Serialize)]
pub struct BoundElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Endpoint binding carried by an arrow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub element_id: String,
    pub focus: f32,
    pub gap: f32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    #[serde(flatten)]
    pub common: ElementCommon,
    pub text: String,
    pub font_size: f32,
    pub font_family: u8,
    pub text_align: String,
    pub vertical_align: String,
    pub container_id: Option<String>,
    pub original_text: String,
    pub auto_resize: bool,
    pub line_height: f32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowElement {
    #[serde(flatten)]
    pub common: ElementCommon,
    pub points: Vec<[f32; 2]>,
    pub last_committed_point: Option<[f32; 2]>,
    pub start_binding: Option<Binding>,
    pub end_binding: Option<Binding>,
    pub start_arrowhead: Option<String>,
    pub end_arrowhead: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShapeElement {
    #[serde(flatten)]
    pub common: ElementCommon,
}

/// Tagged union of the four primitive shapes the generator emits.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Rectangle(ShapeElement),
    Ellipse(ShapeElement),
    Text(TextElement),
    Arrow(ArrowElement),
}

impl Element {
    pub fn common(&self) -> &ElementCommon {
        match self {
            Element::Rectangle(shape) | Element::Ellipse(shape) => &shape.common,
            Element::Text(text) => &text.common,
            Element::Arrow(arrow) => &arrow.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut ElementCommon {
        match self {
            Element::Rectangle(shape) | Element::Ellipse(shape) => &mut shape.common,
            Element::Text(text) => &mut text.common,
            Element::Arrow(arrow) => &mut arrow.common,
        }
    }

    pub fn id(&self) -> &str {
        &self.common().id
    }
}
