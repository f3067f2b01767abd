//! Cairo image surfaces sized from [`CanvasSize`].

use super::color::Color;
use crate::registry::CanvasSize;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("canvas size {width}x{height} is out of range")]
    InvalidSize { width: u32, height: u32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Transparent ARGB32 canvas plus a drawing context targeting it.
pub struct Canvas {
    pub surface: cairo::ImageSurface,
    pub context: cairo::Context,
}

impl Canvas {
    /// Creates a fully transparent canvas of the given size.
    pub fn new(size: CanvasSize) -> Result<Self, CanvasError> {
        let invalid = || CanvasError::InvalidSize {
            width: size.width,
            height: size.height,
        };
        if size.width == 0 || size.height == 0 {
            return Err(invalid());
        }
        let width = i32::try_from(size.width).map_err(|_| invalid())?;
        let height = i32::try_from(size.height).map_err(|_| invalid())?;

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let context = cairo::Context::new(&surface)?;
        log::debug!("Created {}x{} canvas", width, height);
        Ok(Self { surface, context })
    }

    /// Paints the whole canvas with `color`.
    pub fn fill(&self, color: Color) -> Result<(), CanvasError> {
        self.context.save()?;
        self.context.set_source_rgba(color.r, color.g, color.b, color.a);
        self.context.paint()?;
        self.context.restore()?;
        Ok(())
    }

    /// Releases the drawing context and returns the surface, e.g. to read its pixels.
    pub fn into_surface(self) -> cairo::ImageSurface {
        drop(self.context);
        self.surface
    }

    /// Writes the canvas to `path` as PNG.
    pub fn write_png(&self, path: &Path) -> Result<(), CanvasError> {
        write_png(&self.surface, path)
    }
}

/// Creates a transparent surface of `size` and a context drawing onto it.
pub fn create_canvas(
    size: CanvasSize,
) -> Result<(cairo::ImageSurface, cairo::Context), CanvasError> {
    let Canvas { surface, context } = Canvas::new(size)?;
    Ok((surface, context))
}

/// Flushes pending drawing on `surface` and writes it to `path` as PNG.
pub fn write_png(surface: &cairo::ImageSurface, path: &Path) -> Result<(), CanvasError> {
    surface.flush();
    let mut file = File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::info!("Saved canvas to {}", path.display());
    Ok(())
}
