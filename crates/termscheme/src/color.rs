//! Color values and conversions.
//!
//! A [`Color`] is kept exactly as written (hex or functional notation) so it
//! can be handed to a preference store untouched. Numeric channels are only
//! extracted on demand through [`Color::to_rgb`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A color string in a syntax understood by the terminal's preference store.
///
/// No validation happens on construction; stores decide what they accept.
///
/// # Example
///
/// ```rust
/// use termscheme::{Color, Rgb};
///
/// let c = Color::new("#ff8800");
/// assert_eq!(c.to_rgb(), Some(Rgb::new(0xff, 0x88, 0x00)));
///
/// let cursor = Color::new("rgba(238,238,238, 0.5)");
/// assert_eq!(cursor.to_rgb(), Some(Rgb::new(238, 238, 238)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    ///
    /// The alpha channel is dropped. Returns `None` for anything else.
    pub fn to_rgb(&self) -> Option<Rgb> {
        let s = self.0.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return None;
        }
        let channel = |p: &str| p.parse::<u8>().ok();
        Some(Rgb::new(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
        ))
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some(Rgb::new(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb::new(pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self(rgb.to_hex())
    }
}

/// An 8-bit RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a triplet from unit-range components, truncating `c * 255`.
    ///
    /// Out-of-range components are clamped.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let scale = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
        Self::new(scale(r), scale(g), scale(b))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// X11 color spec used by OSC color sequences, e.g. `rgb:ff/88/00`.
    pub fn to_x11(self) -> String {
        format!("rgb:{:02x}/{:02x}/{:02x}", self.r, self.g, self.b)
    }

    /// Relative luminance approximation in `0.0..=1.0`.
    pub fn luma(self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use termscheme::{rgb_to_ansi256, Rgb};
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256(Rgb::new(255, 0, 0)), 196);
/// ```
pub fn rgb_to_ansi256(Rgb { r, g, b }: Rgb) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(Color::new("#3950d7").to_rgb(), Some(Rgb::new(0x39, 0x50, 0xd7)));
        assert_eq!(Color::new("#FFFFFF").to_rgb(), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(Color::new("#f80").to_rgb(), Some(Rgb::new(0xff, 0x88, 0x00)));
    }

    #[test]
    fn test_parse_functional() {
        assert_eq!(
            Color::new("rgb(1, 2, 3)").to_rgb(),
            Some(Rgb::new(1, 2, 3))
        );
        assert_eq!(
            Color::new("rgba(26,26,26, 0.5)").to_rgb(),
            Some(Rgb::new(26, 26, 26))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Color::new("red").to_rgb(), None);
        assert_eq!(Color::new("#12345").to_rgb(), None);
        assert_eq!(Color::new("#gg0000").to_rgb(), None);
        assert_eq!(Color::new("rgb(300, 0, 0)").to_rgb(), None);
        assert_eq!(Color::new("rgb(1, 2)").to_rgb(), None);
        assert_eq!(Color::new("#ééé").to_rgb(), None);
    }

    #[test]
    fn test_from_unit_truncates() {
        // 0.5 * 255 = 127.5 -> 127
        assert_eq!(Rgb::from_unit(0.5, 1.0, 0.0), Rgb::new(127, 255, 0));
        assert_eq!(Rgb::from_unit(-1.0, 2.0, 0.0), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_hex_and_x11_formatting() {
        let rgb = Rgb::new(0x0a, 0xbc, 0xff);
        assert_eq!(rgb.to_hex(), "#0abcff");
        assert_eq!(rgb.to_x11(), "rgb:0a/bc/ff");
        assert_eq!(Color::from(rgb).as_str(), "#0abcff");
    }

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256(Rgb::new(0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256(Rgb::new(255, 255, 255)), 231);
        let mid = rgb_to_ansi256(Rgb::new(128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256(Rgb::new(255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256(Rgb::new(0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256(Rgb::new(0, 0, 255)), 21);
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(Rgb::new(0, 0, 0).luma(), 0.0);
        assert!(Rgb::new(255, 255, 255).luma() > 0.99);
    }
}
