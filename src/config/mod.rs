//! Configuration file support for sketchkit.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchkit/config.toml`. Settings override the registry's style
//! defaults, the canvas size, and how strictly arrow geometry is validated.
//!
//! If no config file exists, the registry defaults are used unchanged.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, GeometryPolicy};
pub use types::{ArrowConfig, CanvasConfig, DrawingConfig};

use crate::draw::ArrowRenderer;
use crate::registry::{CanvasSize, StyleDefaults};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_CANVAS_DIMENSION: u32 = 16384;

/// Main configuration structure containing all user settings.
///
/// All fields have defaults matching the built-in registry and are used when missing
/// from the file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#E3310E"
/// default_thickness = 1.0
///
/// [canvas]
/// width = 800
/// height = 600
///
/// [arrow]
/// geometry = "strict"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Stroke style defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Default canvas dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Arrow rendering settings
    #[serde(default)]
    pub arrow: ArrowConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 0.5 - 50.0 (non-finite falls back to the default)
    /// - `canvas.width`, `canvas.height`: 1 - 16384
    fn validate_and_clamp(&mut self) {
        if !self.drawing.default_thickness.is_finite() {
            log::warn!(
                "Invalid default_thickness {}, using {:.1}",
                self.drawing.default_thickness,
                crate::registry::DEFAULT_LINE_WIDTH
            );
            self.drawing.default_thickness = crate::registry::DEFAULT_LINE_WIDTH;
        } else if !(0.5..=50.0).contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {:.1}, clamping to 0.5-50.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self.drawing.default_thickness.clamp(0.5, 50.0);
        }

        if !(1..=MAX_CANVAS_DIMENSION).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_CANVAS_DIMENSION
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_DIMENSION);
        }

        if !(1..=MAX_CANVAS_DIMENSION).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_CANVAS_DIMENSION
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_DIMENSION);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchkit/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchkit");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file exists
    /// but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Style defaults with this configuration's overrides applied.
    pub fn style_defaults(&self) -> StyleDefaults {
        StyleDefaults {
            stroke_color: self.drawing.default_color.to_color(),
            stroke_width: self.drawing.default_thickness,
            highlight_color: self.drawing.highlight_color.to_color(),
        }
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas.size()
    }

    /// Arrow renderer configured with these defaults and geometry policy.
    pub fn arrow_renderer(&self) -> ArrowRenderer {
        ArrowRenderer::new(self.style_defaults(), self.arrow.geometry)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
