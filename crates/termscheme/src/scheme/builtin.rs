//! Schemes shipped with the crate.

use std::str::FromStr;

use crate::palette::Palette;

use super::config::ThemeConfig;
use super::pair::SchemePair;

const MOUL_DARK_PALETTE: [&str; 16] = [
    "#222222", "#ff0000", "#51ff0f", "#e7a800", "#3950d7", "#d336b1", "#66b2ff", "#cecece",
    "#4e4e4e", "#ff008b", "#62c750", "#f4ff00", "#70a5ed", "#b867e6", "#00d4fc", "#ffffff",
];

const MOUL_LIGHT_PALETTE: [&str; 16] = [
    "#eeeeee", "#cc0000", "#33b20c", "#b27f00", "#263fb2", "#a5267f", "#4c8cd8", "#4c4c4c",
    "#b2b2b2", "#e50066", "#3f9933", "#bfb200", "#4c7fcc", "#994cb2", "#00a5cc", "#333333",
];

const MANFRED_TOURON_LIGHT_PALETTE: [&str; 16] = [
    "#eeeeee", "#cc0000", "#33b30d", "#b38000", "#2640b3", "#a62680", "#4d8cd9", "#4d4d4d",
    "#b3b3b3", "#e60066", "#409933", "#bfb300", "#4d80cc", "#994db3", "#00a6cc", "#333333",
];

/// ManfredTouron dark/light, with translucent cursors.
pub fn manfred_touron() -> SchemePair {
    SchemePair::new(
        ThemeConfig::new(
            "rgba(26,26,26, 0.5)",
            "#1a1a1a",
            "#fafafa",
            Palette::from_strs(MANFRED_TOURON_LIGHT_PALETTE),
        ),
        ThemeConfig::new(
            "rgba(238,238,238, 0.5)",
            "#eeeeee",
            "#000000",
            Palette::from_strs(MOUL_DARK_PALETTE),
        ),
    )
}

/// moul dark/light.
pub fn moul() -> SchemePair {
    SchemePair::new(
        ThemeConfig::new(
            "#191919",
            "#191919",
            "#f9f9f9",
            Palette::from_strs(MOUL_LIGHT_PALETTE),
        ),
        ThemeConfig::new(
            "#eeeeee",
            "#eeeeee",
            "#000000",
            Palette::from_strs(MOUL_DARK_PALETTE),
        ),
    )
}

/// Selects a built-in pair by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinScheme {
    ManfredTouron,
    Moul,
}

impl BuiltinScheme {
    pub const ALL: [BuiltinScheme; 2] = [BuiltinScheme::ManfredTouron, BuiltinScheme::Moul];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinScheme::ManfredTouron => "manfred-touron",
            BuiltinScheme::Moul => "moul",
        }
    }

    /// Name used in generated file headers and toggle functions.
    pub fn display_name(self) -> &'static str {
        match self {
            BuiltinScheme::ManfredTouron => "ManfredTouron",
            BuiltinScheme::Moul => "moul",
        }
    }

    pub fn pair(self) -> SchemePair {
        match self {
            BuiltinScheme::ManfredTouron => manfred_touron(),
            BuiltinScheme::Moul => moul(),
        }
    }
}

impl FromStr for BuiltinScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s) || b.display_name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|b| b.name()).collect();
                format!("unknown scheme '{}' (known: {})", s, known.join(", "))
            })
    }
}
