//! Geometry helpers shared by the renderers and the CLI.
//!
//! This module provides:
//! - [`Point`], a 2D coordinate with `x,y` text parsing
//! - Angle and rotation helpers used by the arrowhead math

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A 2D coordinate in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true when both coordinates are finite (not NaN or infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Errors produced when parsing an `x,y` coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePointError {
    #[error("expected 'x,y', got '{0}'")]
    Format(String),

    #[error("invalid coordinate '{0}'")]
    Coordinate(String),
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParsePointError::Format(s.to_string()))?;

        let coord = |part: &str| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|_| ParsePointError::Coordinate(part.to_string()))
        };
        Ok(Self::new(coord(x)?, coord(y)?))
    }
}

// ============================================================================
// Angles
// ============================================================================

/// Direction of the segment `start -> end` in radians, as `atan2(dy, dx)`.
///
/// A zero-length segment yields `0.0`; non-finite input yields NaN.
pub fn direction_angle(start: Point, end: Point) -> f64 {
    (end.y - start.y).atan2(end.x - start.x)
}

/// Rotates `p` around the origin by `angle` radians (y axis pointing down, as on screen).
pub fn rotate(p: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn parses_coordinate_pairs() {
        assert_eq!("10,20".parse::<Point>().unwrap(), Point::new(10.0, 20.0));
        assert_eq!(
            " -1.5 , 3e2".parse::<Point>().unwrap(),
            Point::new(-1.5, 300.0)
        );
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(matches!(
            "10".parse::<Point>(),
            Err(ParsePointError::Format(_))
        ));
        assert!(matches!(
            "10,abc".parse::<Point>(),
            Err(ParsePointError::Coordinate(c)) if c == "abc"
        ));
    }

    #[test]
    fn direction_angle_follows_atan2() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(direction_angle(origin, Point::new(5.0, 0.0)), 0.0);
        assert!((direction_angle(origin, Point::new(0.0, 5.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((direction_angle(origin, Point::new(-5.0, 0.0)) - PI).abs() < 1e-12);
        assert_eq!(direction_angle(origin, origin), 0.0);
        assert!(direction_angle(origin, Point::new(f64::NAN, 0.0)).is_nan());
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate(Point::new(1.0, 0.0), FRAC_PI_2);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }
}
