//! Arrow rendering: a straight shaft plus a two-stroke open arrowhead.
//!
//! The arrowhead is drawn at the end point. Each wing is stroked in its own user space:
//! the origin is moved to the end point and rotated by the shaft angle plus a fixed
//! offset, then a segment from `(0, 0)` to [`WING_TIP`] is stroked. The offsets
//! (`-1.1π` and `+0.6π`) are deliberately asymmetric and give the arrowhead its look.

use super::color::Color;
use super::surface::Surface;
use crate::config::GeometryPolicy;
use crate::registry::{STYLE_DEFAULTS, StyleDefaults};
use crate::util::{self, Point};
use std::f64::consts::PI;
use thiserror::Error;

/// Rotation of each wing relative to the shaft angle, in radians.
pub const WING_OFFSETS: [f64; 2] = [-(PI * 1.1), PI * 0.6];

/// End of each wing stroke in the wing's rotated user space.
pub const WING_TIP: Point = Point::new(20.0, 20.0);

/// Optional per-arrow style overrides. Unset fields fall back to the style defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArrowStyle {
    pub color: Option<Color>,
    pub thickness: Option<f64>,
}

impl ArrowStyle {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Resolves the effective `(color, thickness)` against `defaults`.
    pub fn resolve(&self, defaults: &StyleDefaults) -> (Color, f64) {
        (
            self.color.unwrap_or(defaults.stroke_color),
            self.thickness.unwrap_or(defaults.stroke_width),
        )
    }
}

/// Geometry rejected by [`GeometryPolicy::Strict`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArrowError {
    #[error("arrow {which} point ({point}) is not finite")]
    NonFinite { which: &'static str, point: Point },

    #[error("arrow has zero length at ({0})")]
    ZeroLength(Point),

    #[error("invalid arrow thickness {0}")]
    InvalidThickness(f64),
}

/// Draws an arrow from `start` to `end` with the registry style defaults.
///
/// No validation is performed: non-finite coordinates flow into the drawing calls and
/// typically produce no visible stroke, and a zero-length arrow still draws its wings
/// (pointing as for a shaft angle of 0). The stroke color and line width stay set on
/// the surface afterwards; the wing transforms are scoped with `save`/`restore`.
pub fn render_arrow<S: Surface + ?Sized>(
    surface: &mut S,
    start: Point,
    end: Point,
    style: &ArrowStyle,
) {
    let (color, thickness) = style.resolve(&STYLE_DEFAULTS);
    draw_arrow(surface, start, end, color, thickness);
}

/// Like [`render_arrow`], but checks the geometry against `policy` first.
///
/// With [`GeometryPolicy::Strict`], degenerate input is reported and nothing is drawn.
pub fn try_render_arrow<S: Surface + ?Sized>(
    surface: &mut S,
    start: Point,
    end: Point,
    style: &ArrowStyle,
    policy: GeometryPolicy,
) -> Result<(), ArrowError> {
    ArrowRenderer::new(STYLE_DEFAULTS, policy).render(surface, start, end, style)
}

/// Returns the rotation applied to each wing for an arrow from `start` to `end`.
pub fn wing_rotations(start: Point, end: Point) -> [f64; 2] {
    let ang = util::direction_angle(start, end);
    WING_OFFSETS.map(|offset| ang + offset)
}

/// Returns the wing tips of the arrowhead in surface coordinates.
pub fn arrowhead_wing_tips(start: Point, end: Point) -> [Point; 2] {
    wing_rotations(start, end).map(|rotation| {
        let tip = util::rotate(WING_TIP, rotation);
        Point::new(end.x + tip.x, end.y + tip.y)
    })
}

fn draw_arrow<S: Surface + ?Sized>(
    surface: &mut S,
    start: Point,
    end: Point,
    color: Color,
    thickness: f64,
) {
    surface.set_stroke_color(color);
    surface.set_line_width(thickness);

    // Shaft
    surface.begin_path();
    surface.move_to(start.x, start.y);
    surface.line_to(end.x, end.y);
    surface.stroke();

    // Wings, each in a fresh user space anchored at the end point
    for rotation in wing_rotations(start, end) {
        surface.save();
        surface.translate(end.x, end.y);
        surface.rotate(rotation);

        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(WING_TIP.x, WING_TIP.y);
        surface.stroke();

        surface.restore();
    }
}

/// Arrow renderer bound to a set of style defaults and a validation policy.
///
/// Use this when defaults come from configuration rather than the registry, or when
/// degenerate geometry should be reported instead of drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArrowRenderer {
    pub defaults: StyleDefaults,
    pub policy: GeometryPolicy,
}

impl ArrowRenderer {
    pub fn new(defaults: StyleDefaults, policy: GeometryPolicy) -> Self {
        Self { defaults, policy }
    }

    /// Checks the arrow against the renderer's policy without drawing anything.
    pub fn validate(
        &self,
        start: Point,
        end: Point,
        style: &ArrowStyle,
    ) -> Result<(), ArrowError> {
        if self.policy == GeometryPolicy::Lenient {
            return Ok(());
        }

        for (which, point) in [("start", start), ("end", end)] {
            if !point.is_finite() {
                return Err(ArrowError::NonFinite { which, point });
            }
        }
        if start == end {
            return Err(ArrowError::ZeroLength(end));
        }
        let (_, thickness) = style.resolve(&self.defaults);
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(ArrowError::InvalidThickness(thickness));
        }
        Ok(())
    }

    /// Validates, then draws the arrow. The surface is untouched on error.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        start: Point,
        end: Point,
        style: &ArrowStyle,
    ) -> Result<(), ArrowError> {
        if let Err(err) = self.validate(start, end, style) {
            log::debug!("Rejected arrow {} -> {}: {}", start, end, err);
            return Err(err);
        }

        let (color, thickness) = style.resolve(&self.defaults);
        draw_arrow(surface, start, end, color, thickness);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recording::{DrawOp, RecordingSurface, StrokedSegment};
    use crate::registry::{self, DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH};

    const EPS: f64 = 1e-9;

    fn draw(start: (f64, f64), end: (f64, f64), style: ArrowStyle) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        render_arrow(&mut surface, start.into(), end.into(), &style);
        surface
    }

    fn wings(surface: &RecordingSurface) -> &[StrokedSegment] {
        &surface.segments()[1..]
    }

    #[test]
    fn shaft_runs_from_start_to_end() {
        let surface = draw((0.0, 0.0), (100.0, 0.0), ArrowStyle::default());
        let shaft = &surface.segments()[0];
        assert_eq!(shaft.start, Point::new(0.0, 0.0));
        assert_eq!(shaft.end, Point::new(100.0, 0.0));
        assert_eq!(surface.segments().len(), 3);
    }

    #[test]
    fn wings_rotate_relative_to_shaft_angle() {
        let start = Point::new(3.0, -4.0);
        let end = Point::new(-20.0, 35.5);
        let ang = (end.y - start.y).atan2(end.x - start.x);

        let surface = draw((start.x, start.y), (end.x, end.y), ArrowStyle::default());
        let wings = wings(&surface);
        assert_eq!(wings.len(), 2);
        assert!((wings[0].rotation - (ang - 1.1 * PI)).abs() < EPS);
        assert!((wings[1].rotation - (ang + 0.6 * PI)).abs() < EPS);

        let expected_len = (20.0f64.powi(2) + 20.0f64.powi(2)).sqrt();
        for wing in wings {
            assert!((wing.local_length() - expected_len).abs() < EPS);
            assert_eq!(wing.local_start, Point::new(0.0, 0.0));
            assert_eq!(wing.local_end, WING_TIP);
            assert!(wing.start.distance(end) < EPS, "wing must start at the tip");
        }
    }

    #[test]
    fn wing_tips_match_recorded_geometry() {
        let start = Point::new(50.0, 50.0);
        let end = Point::new(10.0, 90.0);
        let surface = draw((start.x, start.y), (end.x, end.y), ArrowStyle::default());
        let tips = arrowhead_wing_tips(start, end);
        for (wing, tip) in wings(&surface).iter().zip(tips) {
            assert!(wing.end.distance(tip) < EPS);
        }
    }

    #[test]
    fn defaults_apply_when_style_is_empty() {
        let surface = draw((1.0, 1.0), (2.0, 5.0), ArrowStyle::default());
        assert_eq!(surface.stroke_color(), DEFAULT_LINE_COLOR);
        assert_eq!(surface.line_width(), DEFAULT_LINE_WIDTH);
        for segment in surface.segments() {
            assert_eq!(segment.color, DEFAULT_LINE_COLOR);
            assert_eq!(segment.width, DEFAULT_LINE_WIDTH);
        }
    }

    #[test]
    fn color_override_keeps_default_thickness() {
        let black = Color::from_hex("#000000").unwrap();
        let surface = draw(
            (1.0, 1.0),
            (2.0, 5.0),
            ArrowStyle::default().with_color(black),
        );
        assert_eq!(surface.stroke_color().to_hex(), "#000000");
        assert_eq!(surface.line_width(), DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn thickness_override_keeps_default_color() {
        let surface = draw(
            (0.0, 0.0),
            (0.0, 10.0),
            ArrowStyle::default().with_thickness(4.5),
        );
        assert_eq!(surface.stroke_color(), DEFAULT_LINE_COLOR);
        assert_eq!(surface.line_width(), 4.5);
    }

    #[test]
    fn transforms_are_scoped_but_style_persists() {
        let surface = draw((0.0, 0.0), (10.0, 10.0), ArrowStyle::default());
        assert_eq!(surface.save_depth(), 0);

        let saves = surface.ops().iter().filter(|op| **op == DrawOp::Save).count();
        let restores = surface
            .ops()
            .iter()
            .filter(|op| **op == DrawOp::Restore)
            .count();
        assert_eq!((saves, restores), (2, 2));

        // Style is set before the first save, so it survives both restores
        assert!(matches!(
            surface.ops().first(),
            Some(DrawOp::SetStrokeColor { .. })
        ));
        assert_eq!(surface.stroke_color(), DEFAULT_LINE_COLOR);
    }

    #[test]
    fn rendering_does_not_touch_the_registry() {
        let before = (
            registry::STYLE_DEFAULTS,
            registry::palette().to_vec(),
            registry::shortcuts().clone(),
        );
        draw(
            (0.0, 0.0),
            (5.0, 5.0),
            ArrowStyle::default().with_color(Color::rgb8(1, 1, 1)),
        );
        let after = (
            registry::STYLE_DEFAULTS,
            registry::palette().to_vec(),
            registry::shortcuts().clone(),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn horizontal_arrow_end_to_end() {
        let surface = draw((10.0, 10.0), (110.0, 10.0), ArrowStyle::default());
        let segments = surface.segments();

        assert_eq!(segments[0].start, Point::new(10.0, 10.0));
        assert_eq!(segments[0].end, Point::new(110.0, 10.0));
        assert_eq!(util::direction_angle(segments[0].start, segments[0].end), 0.0);

        assert!((segments[1].rotation - (-1.1 * PI)).abs() < EPS);
        assert!((segments[2].rotation - 0.6 * PI).abs() < EPS);

        for segment in segments {
            assert_eq!(segment.color.to_hex(), "#E3310E");
            assert_eq!(segment.width, 1.0);
        }
    }

    #[test]
    fn zero_length_arrow_draws_with_zero_angle() {
        let surface = draw((5.0, 5.0), (5.0, 5.0), ArrowStyle::default());
        assert_eq!(surface.segments().len(), 3);
        assert!((surface.segments()[1].rotation - WING_OFFSETS[0]).abs() < EPS);
    }

    #[test]
    fn non_finite_input_is_passed_through() {
        let surface = draw((f64::NAN, 0.0), (10.0, 0.0), ArrowStyle::default());
        assert!(surface.segments()[0].start.x.is_nan());
        assert!(surface.segments()[1].rotation.is_nan());
    }

    #[test]
    fn strict_policy_rejects_degenerate_geometry() {
        let renderer = ArrowRenderer::new(STYLE_DEFAULTS, GeometryPolicy::Strict);
        let mut surface = RecordingSurface::new();
        let style = ArrowStyle::default();

        let err = renderer
            .render(
                &mut surface,
                Point::new(0.0, f64::INFINITY),
                Point::new(1.0, 1.0),
                &style,
            )
            .unwrap_err();
        assert!(matches!(err, ArrowError::NonFinite { which: "start", .. }));

        let err = renderer
            .render(&mut surface, Point::new(2.0, 2.0), Point::new(2.0, 2.0), &style)
            .unwrap_err();
        assert_eq!(err, ArrowError::ZeroLength(Point::new(2.0, 2.0)));

        let err = renderer
            .render(
                &mut surface,
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                &style.with_thickness(0.0),
            )
            .unwrap_err();
        assert_eq!(err, ArrowError::InvalidThickness(0.0));

        assert!(surface.ops().is_empty());
    }

    #[test]
    fn lenient_renderer_matches_render_arrow() {
        let renderer = ArrowRenderer::default();
        let mut surface = RecordingSurface::new();
        renderer
            .render(
                &mut surface,
                Point::new(7.0, 8.0),
                Point::new(7.0, 8.0),
                &ArrowStyle::default(),
            )
            .unwrap();

        let expected = draw((7.0, 8.0), (7.0, 8.0), ArrowStyle::default());
        assert_eq!(surface.ops(), expected.ops());
    }

    #[test]
    fn renderer_uses_its_own_defaults() {
        let defaults = StyleDefaults {
            stroke_color: Color::rgb8(0x12, 0x34, 0x56),
            stroke_width: 3.0,
            ..STYLE_DEFAULTS
        };
        let renderer = ArrowRenderer::new(defaults, GeometryPolicy::Strict);
        let mut surface = RecordingSurface::new();
        renderer
            .render(
                &mut surface,
                Point::new(0.0, 0.0),
                Point::new(0.0, 40.0),
                &ArrowStyle::default(),
            )
            .unwrap();
        assert_eq!(surface.stroke_color().to_hex(), "#123456");
        assert_eq!(surface.line_width(), 3.0);
    }

    #[test]
    fn try_render_arrow_applies_policy_with_registry_defaults() {
        let mut surface = RecordingSurface::new();
        let err = try_render_arrow(
            &mut surface,
            Point::new(4.0, 4.0),
            Point::new(4.0, 4.0),
            &ArrowStyle::default(),
            GeometryPolicy::Strict,
        )
        .unwrap_err();
        assert_eq!(err, ArrowError::ZeroLength(Point::new(4.0, 4.0)));
        assert!(surface.ops().is_empty());

        try_render_arrow(
            &mut surface,
            Point::new(10.0, 10.0),
            Point::new(110.0, 10.0),
            &ArrowStyle::default(),
            GeometryPolicy::Strict,
        )
        .unwrap();
        let expected = draw((10.0, 10.0), (110.0, 10.0), ArrowStyle::default());
        assert_eq!(surface.ops(), expected.ops());
        assert_eq!(surface.stroke_color(), DEFAULT_LINE_COLOR);
    }

    #[test]
    fn try_render_arrow_lenient_draws_degenerate_input() {
        let mut surface = RecordingSurface::new();
        try_render_arrow(
            &mut surface,
            Point::new(4.0, 4.0),
            Point::new(4.0, 4.0),
            &ArrowStyle::default(),
            GeometryPolicy::Lenient,
        )
        .unwrap();
        assert_eq!(surface.segments().len(), 3);
    }
}
