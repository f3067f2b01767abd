//! Configuration type definitions.

use super::enums::{ColorSpec, GeometryPolicy};
use crate::registry::{CanvasSize, DEFAULT_CANVAS_SIZE, STYLE_DEFAULTS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the stroke style used when a shape does not carry its own.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - a hex string like `"#E3310E"`, a palette index,
    /// or an RGB array like `[227, 49, 14]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Emphasis color for selections (never used for strokes)
    #[serde(default = "default_highlight_color")]
    pub highlight_color: ColorSpec,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            highlight_color: default_highlight_color(),
        }
    }
}

/// Canvas dimensions used when creating a drawing surface.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

impl CanvasConfig {
    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// Arrow drawing settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Default)]
pub struct ArrowConfig {
    /// Geometry validation: "lenient" draws anything, "strict" rejects
    /// non-finite or zero-length arrows
    #[serde(default)]
    pub geometry: GeometryPolicy,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Palette(0)
}

fn default_thickness() -> f64 {
    STYLE_DEFAULTS.stroke_width
}

fn default_highlight_color() -> ColorSpec {
    ColorSpec::Hex(STYLE_DEFAULTS.highlight_color.to_hex())
}

fn default_canvas_width() -> u32 {
    DEFAULT_CANVAS_SIZE.width
}

fn default_canvas_height() -> u32 {
    DEFAULT_CANVAS_SIZE.height
}
