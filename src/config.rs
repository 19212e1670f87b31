use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resolved layout configuration. One instance drives the whole build; every
/// generator consumes the same values, there are no per-operator overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramConfig {
    pub node_width: f32,
    pub node_height: f32,
    pub vertical_spacing: f32,
    pub horizontal_spacing: f32,
    pub font_size: f32,
    pub label_font_size: f32,
    pub detail_font_size: f32,
    pub node_stroke_color: String,
    pub arrow_stroke_color: String,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            node_width: 240.0,
            node_height: 90.0,
            vertical_spacing: 140.0,
            horizontal_spacing: 100.0,
            font_size: 14.0,
            label_font_size: 18.0,
            detail_font_size: 12.0,
            node_stroke_color: "#1e1e1e".to_string(),
            arrow_stroke_color: "#868e96".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    node_width: Option<f32>,
    node_height: Option<f32>,
    vertical_spacing: Option<f32>,
    horizontal_spacing: Option<f32>,
    font_size: Option<f32>,
    label_font_size: Option<f32>,
    detail_font_size: Option<f32>,
    node_stroke_color: Option<String>,
    arrow_stroke_color: Option<String>,
}

/// Loads a camelCase JSON file of optional overrides and folds it onto the
/// defaults. `None` path returns the defaults unchanged.
pub fn load_config(path: Option<&Path>) -> Result<DiagramConfig> {
    let mut config = DiagramConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(v) = parsed.node_width {
        config.node_width = v;
    }
    if let Some(v) = parsed.node_height {
        config.node_height = v;
    }
    if let Some(v) = parsed.vertical_spacing {
        config.vertical_spacing = v;
    }
    if let Some(v) = parsed.horizontal_spacing {
        config.horizontal_spacing = v;
    }
    if let Some(v) = parsed.font_size {
        config.font_size = v;
    }
    if let Some(v) = parsed.label_font_size {
        config.label_font_size = v;
    }
    if let Some(v) = parsed.detail_font_size {
        config.detail_font_size = v;
    }
    if let Some(v) = parsed.node_stroke_color {
        config.node_stroke_color = v;
    }
    if let Some(v) = parsed.arrow_stroke_color {
        config.arrow_stroke_color = v;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config.node_width, 240.0);
        assert_eq!(config.node_stroke_color, "#1e1e1e");
    }

    #[test]
    fn overrides_fold_onto_defaults() {
        let parsed: ConfigFile =
            serde_json::from_str(r##"{"nodeWidth": 300, "arrowStrokeColor": "#000000"}"##).unwrap();
        let mut config = DiagramConfig::default();
        if let Some(v) = parsed.node_width {
            config.node_width = v;
        }
        if let Some(v) = parsed.arrow_stroke_color {
            config.arrow_stroke_color = v;
        }
        assert_eq!(config.node_width, 300.0);
        assert_eq!(config.arrow_stroke_color, "#000000");
        assert_eq!(config.node_height, 90.0);
    }
}
