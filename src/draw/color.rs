//! RGBA color type, hex parsing, and the fixed stroke palette.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchkit::draw::Color;
/// let accent = Color::rgb8(0xE3, 0x31, 0x0E);
/// assert_eq!(accent.to_hex(), "#E3310E");
/// assert_eq!("#e3310e".parse::<Color>().unwrap(), accent);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Errors produced when parsing a `#RRGGBB` or `#RRGGBBAA` color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected 6 or 8 hex digits, got {0} characters in '{1}'")]
    Length(usize, String),

    #[error("invalid hex digit in color '{0}'")]
    InvalidDigit(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional, digits are
    /// case-insensitive). Without an alpha pair the color is opaque.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::Length(
                digits.chars().count(),
                input.to_string(),
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))
        };
        let mut color = Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?);
        if digits.len() == 8 {
            color.a = f64::from(channel(6..8)?) / 255.0;
        }
        Ok(color)
    }

    /// Formats the color as upper-case `#RRGGBB`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Formats the color as `#RRGGBB` when opaque and `#RRGGBBAA` otherwise.
    pub fn to_hex_rgba(&self) -> String {
        let alpha = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        if alpha == u8::MAX {
            self.to_hex()
        } else {
            format!("{}{alpha:02X}", self.to_hex())
        }
    }

    /// Returns the color quantized to 8-bit channels.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Vermilion, the default stroke color (`#E3310E`).
pub const VERMILION: Color = Color::rgb8(0xE3, 0x31, 0x0E);

/// Orange used for selection and UI emphasis (`#EB6F09`).
pub const SELECT_ORANGE: Color = Color::rgb8(0xEB, 0x6F, 0x09);

/// Ordered stroke palette. Index 0 is the default stroke color.
pub const PALETTE: [Color; 8] = [
    VERMILION,
    Color::rgb8(0xF5, 0xA6, 0x23),
    Color::rgb8(0xF8, 0xE7, 0x1C),
    Color::rgb8(0x7E, 0xD3, 0x21),
    Color::rgb8(0x4A, 0x90, 0xE2),
    Color::rgb8(0x90, 0x13, 0xFE),
    Color::rgb8(0x00, 0x00, 0x00),
    Color::rgb8(0xFF, 0xFF, 0xFF),
];
