//! Configuration enum types.

use crate::draw::{Color, color::PALETTE};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How renderers treat degenerate arrow geometry.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum GeometryPolicy {
    /// Draw whatever the coordinates describe, NaN and zero-length included
    #[default]
    Lenient,
    /// Reject non-finite points, zero-length arrows and non-positive thickness
    Strict,
}

/// Color specification - a hex string, a palette index, or RGB values.
///
/// # Examples
/// ```toml
/// # Hex color
/// default_color = "#E3310E"
///
/// # Palette entry (0 is the default stroke color)
/// default_color = 4
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex color as `#RRGGBB`
    Hex(String),
    /// Index into the stroke palette
    Palette(usize),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Malformed hex strings and out-of-range palette indices fall back to the default
    /// stroke color with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Hex(hex) => Color::from_hex(hex).unwrap_or_else(|err| {
                warn!("Invalid color '{}' ({}), using default", hex, err);
                PALETTE[0]
            }),
            ColorSpec::Palette(index) => PALETTE.get(*index).copied().unwrap_or_else(|| {
                warn!(
                    "Palette index {} out of range (0-{}), using default",
                    index,
                    PALETTE.len() - 1
                );
                PALETTE[0]
            }),
            ColorSpec::Rgb([r, g, b]) => Color::rgb8(*r, *g, *b),
        }
    }
}
