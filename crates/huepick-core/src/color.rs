//! RGB colors, hex codes and HSV/HSL conversion.
//!
//! A [`Color`] is an 8-bit RGB triple whose lowercase `#rrggbb` form is its
//! identity. HSV and HSL are display models: saturation, value and lightness
//! are shown as 0-100 percentages and converted to the 0-255 channel scale by
//! a factor of 2.55, so a trip through them may move a channel slightly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest hue, in degrees.
pub const MAX_HUE: u16 = 359;

/// Largest percentage field value.
pub const MAX_PERCENT: u8 = 100;

/// Number of distinct RGB colors.
pub const COLOR_SPACE_SIZE: usize = 1 << 24;

/// Color parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Parse `#rrggbb` or `rrggbb`, any case, surrounding whitespace ignored.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        hex.parse()
    }

    /// Position of this color in the 24-bit color space.
    pub fn to_index(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Color at `index` in the 24-bit color space. Higher bits are ignored.
    pub fn from_index(index: u32) -> Self {
        Self::new((index >> 16) as u8, (index >> 8) as u8, index as u8)
    }

    /// Convert to HSV display fields.
    pub fn to_hsv(self) -> Hsv {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let saturation = if max > 0.0 { delta / max } else { 0.0 };

        Hsv {
            h: hue_degrees(r, g, b, max, delta),
            s: channel_to_percent(unit_to_channel(saturation)),
            v: channel_to_percent(unit_to_channel(max)),
        }
    }

    /// Build a color from HSV display fields. Out-of-range input is clamped.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let s = f64::from(percent_to_channel(hsv.s)) / 255.0;
        let v = f64::from(percent_to_channel(hsv.v)) / 255.0;
        let chroma = v * s;
        from_hue_chroma(clamp_hue(hsv.h), chroma, v - chroma)
    }

    /// Convert to HSL display fields.
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let lightness = (max + min) / 2.0;
        let saturation = if delta > 0.0 {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        } else {
            0.0
        };

        Hsl {
            h: hue_degrees(r, g, b, max, delta),
            s: channel_to_percent(unit_to_channel(saturation)),
            l: channel_to_percent(unit_to_channel(lightness)),
        }
    }

    /// Build a color from HSL display fields. Out-of-range input is clamped.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let s = f64::from(percent_to_channel(hsl.s)) / 255.0;
        let l = f64::from(percent_to_channel(hsl.l)) / 255.0;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        from_hue_chroma(clamp_hue(hsl.h), chroma, l - chroma / 2.0)
    }

    fn unit_channels(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl Hsv {
    pub const fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// 0-100 percentage to the 0-255 channel scale (`percent * 2.55`, rounded).
pub fn percent_to_channel(percent: u8) -> u8 {
    let percent = u32::from(percent.min(MAX_PERCENT));
    ((percent * 255 + 50) / 100) as u8
}

/// 0-255 channel scale to a 0-100 percentage (`channel / 2.55`, rounded).
pub fn channel_to_percent(channel: u8) -> u8 {
    ((u32::from(channel) * 100 + 127) / 255) as u8
}

fn clamp_hue(hue: u16) -> f64 {
    f64::from(hue.min(MAX_HUE))
}

fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Hue in whole degrees; achromatic colors report 0.
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> u16 {
    if delta <= 0.0 {
        return 0;
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    ((sector * 60.0).round() as u16) % 360
}

fn from_hue_chroma(hue: f64, chroma: f64, offset: f64) -> Color {
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Color::new(
        unit_to_channel(r + offset),
        unit_to_channel(g + offset),
        unit_to_channel(b + offset),
    )
}
