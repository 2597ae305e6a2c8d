//! Preference stores owned by the terminal.
//!
//! The terminal keeps its settings in a key-value store it owns; this crate
//! only ever reaches it through [`PreferenceStore`]. Two implementations
//! ship here:
//!
//! - [`MemoryStore`]: an in-process map, optionally strict about colors
//! - [`OscStore`]: writes xterm OSC color sequences to a terminal

mod error;
mod memory;
mod osc;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use osc::OscStore;

use crate::color::Color;
use crate::palette::Palette;
use crate::scheme::ThemeConfig;

/// The preference keys a theme writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefKey {
    CursorColor,
    ForegroundColor,
    BackgroundColor,
    PaletteOverrides,
}

impl PrefKey {
    /// All theme keys, in write order.
    pub const ALL: [PrefKey; 4] = [
        PrefKey::CursorColor,
        PrefKey::ForegroundColor,
        PrefKey::BackgroundColor,
        PrefKey::PaletteOverrides,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PrefKey::CursorColor => "cursor-color",
            PrefKey::ForegroundColor => "foreground-color",
            PrefKey::BackgroundColor => "background-color",
            PrefKey::PaletteOverrides => "color-palette-overrides",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

/// A value held under a preference key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefValue {
    Color(Color),
    Palette(Palette),
}

impl PrefValue {
    pub fn as_color(&self) -> Option<&Color> {
        match self {
            PrefValue::Color(c) => Some(c),
            PrefValue::Palette(_) => None,
        }
    }

    pub fn as_palette(&self) -> Option<&Palette> {
        match self {
            PrefValue::Palette(p) => Some(p),
            PrefValue::Color(_) => None,
        }
    }
}

impl std::fmt::Display for PrefValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefValue::Color(c) => write!(f, "{}", c),
            PrefValue::Palette(p) => {
                let colors: Vec<&str> = p.iter().map(Color::as_str).collect();
                write!(f, "[{}]", colors.join(", "))
            }
        }
    }
}

impl From<Color> for PrefValue {
    fn from(color: Color) -> Self {
        PrefValue::Color(color)
    }
}

impl From<Palette> for PrefValue {
    fn from(palette: Palette) -> Self {
        PrefValue::Palette(palette)
    }
}

/// A terminal's key-value preference store.
///
/// Implementations decide which values they accept; a refused value comes
/// back as [`StoreError::Rejected`].
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<PrefValue>;

    fn set(&mut self, key: &str, value: PrefValue) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Option<PrefValue> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: PrefValue) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Writes the four theme keys of `config` to `store`.
///
/// Keys are written cursor, foreground, background, palette. The first
/// rejection stops the write and is returned as is; earlier keys stay written.
pub fn write_theme<S: PreferenceStore + ?Sized>(
    store: &mut S,
    config: &ThemeConfig,
) -> Result<(), StoreError> {
    let values = [
        PrefValue::Color(config.cursor_color.clone()),
        PrefValue::Color(config.foreground_color.clone()),
        PrefValue::Color(config.background_color.clone()),
        PrefValue::Palette(config.palette_overrides.clone()),
    ];
    for (key, value) in PrefKey::ALL.into_iter().zip(values) {
        tracing::trace!(key = key.as_str(), %value, "setting preference");
        store.set(key.as_str(), value)?;
    }
    Ok(())
}
