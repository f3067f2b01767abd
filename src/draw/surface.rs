//! Immediate-mode drawing capability used by the renderers.

use super::color::Color;

/// Minimal 2D immediate-mode drawing interface.
///
/// Mirrors the subset of a Cairo/canvas context the renderers rely on: stroke styling,
/// path construction, and a save/restore stack for the transform. Styling set through
/// this trait persists on the surface after a renderer returns.
pub trait Surface {
    /// Sets the color used by subsequent strokes.
    fn set_stroke_color(&mut self, color: Color);

    /// Sets the line width used by subsequent strokes.
    fn set_line_width(&mut self, width: f64);

    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);

    /// Starts a new subpath at `(x, y)` in the current user space.
    fn move_to(&mut self, x: f64, y: f64);

    /// Adds a straight segment to `(x, y)` in the current user space.
    fn line_to(&mut self, x: f64, y: f64);

    /// Strokes the current path with the current color and width, then clears the path.
    fn stroke(&mut self);

    /// Pushes the current drawing state (transform included).
    fn save(&mut self);

    /// Pops the drawing state pushed by the matching [`Surface::save`].
    fn restore(&mut self);

    /// Moves the origin of the user space by `(tx, ty)`.
    fn translate(&mut self, tx: f64, ty: f64);

    /// Rotates the user space by `angle` radians.
    fn rotate(&mut self, angle: f64);
}

impl Surface for cairo::Context {
    fn set_stroke_color(&mut self, color: Color) {
        self.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn set_line_width(&mut self, width: f64) {
        cairo::Context::set_line_width(self, width);
    }

    fn begin_path(&mut self) {
        self.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        cairo::Context::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        cairo::Context::line_to(self, x, y);
    }

    fn stroke(&mut self) {
        // Stroke failures leave the surface unchanged; drawing is best-effort
        if let Err(err) = cairo::Context::stroke(self) {
            log::warn!("Cairo stroke failed: {}", err);
        }
    }

    fn save(&mut self) {
        if let Err(err) = cairo::Context::save(self) {
            log::warn!("Cairo save failed: {}", err);
        }
    }

    fn restore(&mut self) {
        if let Err(err) = cairo::Context::restore(self) {
            log::warn!("Cairo restore failed: {}", err);
        }
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        cairo::Context::translate(self, tx, ty);
    }

    fn rotate(&mut self, angle: f64) {
        cairo::Context::rotate(self, angle);
    }
}
