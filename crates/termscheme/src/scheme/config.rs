//! The theme record applied to a terminal's preference store.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::palette::Palette;

/// Everything a theme writes to the preference store.
///
/// Serialized field names follow the hterm profile object (`cursor`,
/// `foreground`, `background`, `colors`); the preference key names are
/// accepted as aliases.
///
/// # Example
///
/// ```rust
/// use termscheme::{Palette, ThemeConfig};
///
/// let config = ThemeConfig::new(
///     "#eeeeee",
///     "#eeeeee",
///     "#000000",
///     Palette::from_strs([
///         "#222222", "#ff0000", "#51ff0f", "#e7a800", "#3950d7", "#d336b1", "#66b2ff", "#cecece",
///         "#4e4e4e", "#ff008b", "#62c750", "#f4ff00", "#70a5ed", "#b867e6", "#00d4fc", "#ffffff",
///     ]),
/// );
/// assert_eq!(config.background_color.as_str(), "#000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(rename = "cursor", alias = "cursor-color")]
    pub cursor_color: Color,
    #[serde(rename = "foreground", alias = "foreground-color")]
    pub foreground_color: Color,
    #[serde(rename = "background", alias = "background-color")]
    pub background_color: Color,
    #[serde(rename = "colors", alias = "color-palette-overrides")]
    pub palette_overrides: Palette,
}

impl ThemeConfig {
    pub fn new(
        cursor: impl Into<Color>,
        foreground: impl Into<Color>,
        background: impl Into<Color>,
        palette: Palette,
    ) -> Self {
        Self {
            cursor_color: cursor.into(),
            foreground_color: foreground.into(),
            background_color: background.into(),
            palette_overrides: palette,
        }
    }

    /// Parses a single config from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }
}
