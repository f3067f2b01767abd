//! In-memory [`Surface`] that records drawing calls instead of rasterizing them.
//!
//! Used to inspect renderer output (tests, `--trace` in the CLI). The recorder mirrors
//! Cairo semantics: `save`/`restore` cover the transform, stroke color and line width,
//! and `stroke` consumes the current path.

use super::color::Color;
use super::surface::Surface;
use crate::util::Point;
use serde::Serialize;

/// A single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    SetStrokeColor { color: String },
    SetLineWidth { width: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate { angle: f64 },
}

/// A straight segment that was stroked onto the surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokedSegment {
    /// Segment start in surface coordinates
    pub start: Point,
    /// Segment end in surface coordinates
    pub end: Point,
    /// Segment start in the user space active when it was added
    pub local_start: Point,
    /// Segment end in the user space active when it was added
    pub local_end: Point,
    /// Accumulated `rotate` angle of that user space, in radians (not normalized)
    pub rotation: f64,
    #[serde(serialize_with = "serialize_color")]
    pub color: Color,
    pub width: f64,
}

impl StrokedSegment {
    /// Length of the segment measured in its own user space.
    pub fn local_length(&self) -> f64 {
        self.local_start.distance(self.local_end)
    }
}

fn serialize_color<S: serde::Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&color.to_hex_rgba())
}

/// Affine transform in Cairo's matrix layout.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Matrix {
    xx: f64,
    yx: f64,
    xy: f64,
    yy: f64,
    x0: f64,
    y0: f64,
}

impl Matrix {
    const IDENTITY: Matrix = Matrix {
        xx: 1.0,
        yx: 0.0,
        xy: 0.0,
        yy: 1.0,
        x0: 0.0,
        y0: 0.0,
    };

    fn translate(&mut self, tx: f64, ty: f64) {
        self.x0 += self.xx * tx + self.xy * ty;
        self.y0 += self.yx * tx + self.yy * ty;
    }

    fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let (xx, yx, xy, yy) = (self.xx, self.yx, self.xy, self.yy);
        self.xx = xx * cos + xy * sin;
        self.yx = yx * cos + yy * sin;
        self.xy = xy * cos - xx * sin;
        self.yy = yy * cos - yx * sin;
    }

    fn apply(&self, p: Point) -> Point {
        Point::new(
            self.xx * p.x + self.xy * p.y + self.x0,
            self.yx * p.x + self.yy * p.y + self.y0,
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct GraphicsState {
    matrix: Matrix,
    rotation: f64,
    color: Color,
    width: f64,
}

#[derive(Debug, Clone, Copy)]
struct PendingSegment {
    local_start: Point,
    local_end: Point,
    matrix: Matrix,
    rotation: f64,
}

/// Records every drawing call and the segments each stroke produced.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    segments: Vec<StrokedSegment>,
    state: GraphicsState,
    stack: Vec<GraphicsState>,
    path: Vec<PendingSegment>,
    current: Option<Point>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Creates an empty recorder with an identity transform.
    ///
    /// Initial styling matches a fresh canvas: black stroke, width 1.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            segments: Vec::new(),
            state: GraphicsState {
                matrix: Matrix::IDENTITY,
                rotation: 0.0,
                color: Color::rgb8(0, 0, 0),
                width: 1.0,
            },
            stack: Vec::new(),
            path: Vec::new(),
            current: None,
        }
    }

    /// All calls made so far, in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// All stroked segments so far, in stroke order.
    pub fn segments(&self) -> &[StrokedSegment] {
        &self.segments
    }

    /// Current stroke color.
    pub fn stroke_color(&self) -> Color {
        self.state.color
    }

    /// Current line width.
    pub fn line_width(&self) -> f64 {
        self.state.width
    }

    /// Number of `save` calls not yet matched by `restore`.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }
}

impl Surface for RecordingSurface {
    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetStrokeColor {
            color: color.to_hex_rgba(),
        });
        self.state.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::SetLineWidth { width });
        self.state.width = width;
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
        self.path.clear();
        self.current = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
        self.current = Some(Point::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo { x, y });
        let end = Point::new(x, y);
        // Without a current point, line_to behaves like move_to
        if let Some(start) = self.current {
            self.path.push(PendingSegment {
                local_start: start,
                local_end: end,
                matrix: self.state.matrix,
                rotation: self.state.rotation,
            });
        }
        self.current = Some(end);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
        let color = self.state.color;
        let width = self.state.width;
        self.segments
            .extend(self.path.drain(..).map(|pending| StrokedSegment {
                start: pending.matrix.apply(pending.local_start),
                end: pending.matrix.apply(pending.local_end),
                local_start: pending.local_start,
                local_end: pending.local_end,
                rotation: pending.rotation,
                color,
                width,
            }));
        self.current = None;
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("restore() without matching save(), ignoring"),
        }
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.ops.push(DrawOp::Translate { x: tx, y: ty });
        self.state.matrix.translate(tx, ty);
    }

    fn rotate(&mut self, angle: f64) {
        self.ops.push(DrawOp::Rotate { angle });
        self.state.matrix.rotate(angle);
        self.state.rotation += angle;
    }
}
