//! Colors for drawing the construction's levels.

use std::fmt::{Display, Formatter};

/// Hue step between consecutive depths, spreads the colors evenly however many are used
const GOLDEN_ANGLE: f64 = 137.507_764_050_037_85;

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Color {
    /// Black
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Red
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Blue
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Convert from hue (degrees), saturation and value (both between 0 and 1)
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let chroma = value * saturation;
        let sector = hue.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = value - chroma;
        let channel = |c: f64| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::rgb(channel(r), channel(g), channel(b))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Computes a color for every construction depth on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Hue of depth 0 in degrees
    pub hue_offset: f64,
    /// Saturation shared by all colors
    pub saturation: f64,
    /// Value shared by all colors
    pub value: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            hue_offset: 30.0,
            saturation: 0.75,
            value: 0.85,
        }
    }
}

impl Palette {
    /// Color for the level `depth` interpolation steps deep
    pub fn color(&self, depth: usize) -> Color {
        let hue = self.hue_offset + depth as f64 * GOLDEN_ANGLE;
        Color::from_hsv(hue, self.saturation, self.value)
    }
}
