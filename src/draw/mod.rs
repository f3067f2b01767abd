//! Rendering primitives (Cairo-based).
//!
//! This module defines the drawing types used by the tool registry and renderers:
//! - [`Color`]: RGBA color with hex parsing and the stroke palette
//! - [`Surface`]: the drawing capability renderers draw through
//! - [`RecordingSurface`]: a `Surface` that records calls for inspection
//! - [`render_arrow`] and [`ArrowRenderer`]: shaft plus open arrowhead
//! - [`Canvas`]: Cairo image surfaces sized from the canvas defaults

pub mod arrow;
pub mod canvas;
pub mod color;
pub mod recording;
pub mod surface;

// Re-export commonly used types at module level
pub use arrow::{
    ArrowError, ArrowRenderer, ArrowStyle, arrowhead_wing_tips, render_arrow, try_render_arrow,
};
pub use canvas::{Canvas, CanvasError, create_canvas, write_png};
pub use color::{Color, ColorParseError, PALETTE};
pub use recording::{DrawOp, RecordingSurface, StrokedSegment};
pub use surface::Surface;
