//! hterm profile scripts.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ImportError;
use crate::color::Color;
use crate::palette::Palette;
use crate::scheme::ThemeConfig;

static PREF_SET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"prefs_\.set\(\s*["'](cursor-color|foreground-color|background-color)["']\s*,\s*["']([^"']+)["']\s*\)"#,
    )
    .expect("valid regex")
});

static PREF_PALETTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"prefs_\.set\(\s*["']color-palette-overrides["']\s*,\s*\[([^\]]+)\]"#)
        .expect("valid regex")
});

static PROFILE_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*(cursor|foreground|background)\s*:\s*["']([^"']+)["']"#)
        .expect("valid regex")
});

static PROFILE_COLORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"colors\s*:\s*\[([^\]]+)\]"#).expect("valid regex"));

/// Reads the theme out of an hterm script.
///
/// Two shapes are understood:
///
/// - `t.prefs_.set("background-color", "#000000");` calls
/// - a profile object literal with `cursor`, `foreground`, `background`
///   and `colors` fields
///
/// The first occurrence of each field wins, which for an auto-switching
/// script is its dark scheme.
pub fn from_hterm(source: &str) -> Result<ThemeConfig, ImportError> {
    let pick = |pref: &str, field: &str| -> Result<Color, ImportError> {
        PREF_SET
            .captures_iter(source)
            .find(|c| &c[1] == pref)
            .or_else(|| PROFILE_FIELD.captures_iter(source).find(|c| &c[1] == field))
            .map(|c| Color::new(&c[2]))
            .ok_or_else(|| ImportError::MissingColor {
                name: pref.to_string(),
            })
    };

    let list = PREF_PALETTE
        .captures(source)
        .or_else(|| PROFILE_COLORS.captures(source))
        .ok_or_else(|| ImportError::MissingColor {
            name: "color-palette-overrides".into(),
        })?;
    let colors: Vec<Color> = list[1]
        .split(',')
        .map(|c| c.trim().trim_matches(|q| q == '"' || q == '\''))
        .filter(|c| !c.is_empty())
        .map(Color::new)
        .collect();

    Ok(ThemeConfig {
        cursor_color: pick("cursor-color", "cursor")?,
        foreground_color: pick("foreground-color", "foreground")?,
        background_color: pick("background-color", "background")?,
        palette_overrides: Palette::try_from(colors)?,
    })
}
