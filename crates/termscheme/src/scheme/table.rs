//! Full color tables for conversion between terminal formats.

use crate::color::Color;
use crate::palette::{Palette, PALETTE_SIZE};

use super::config::ThemeConfig;

/// A named entry of a color table.
///
/// Names follow iTerm2 (`"Ansi 4 Color"`, `"Cursor Text Color"`); xrdb uses
/// the same names with underscores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedColor {
    Ansi(u8),
    Background,
    Foreground,
    Cursor,
    CursorText,
    Bold,
    Selection,
    SelectedText,
}

impl NamedColor {
    /// Every entry in canonical output order.
    pub fn all() -> impl Iterator<Item = NamedColor> {
        (0..PALETTE_SIZE as u8).map(NamedColor::Ansi).chain([
            NamedColor::Background,
            NamedColor::Foreground,
            NamedColor::Cursor,
            NamedColor::CursorText,
            NamedColor::Bold,
            NamedColor::Selection,
            NamedColor::SelectedText,
        ])
    }

    pub fn iterm_name(self) -> String {
        match self {
            NamedColor::Ansi(n) => format!("Ansi {} Color", n),
            NamedColor::Background => "Background Color".into(),
            NamedColor::Foreground => "Foreground Color".into(),
            NamedColor::Cursor => "Cursor Color".into(),
            NamedColor::CursorText => "Cursor Text Color".into(),
            NamedColor::Bold => "Bold Color".into(),
            NamedColor::Selection => "Selection Color".into(),
            NamedColor::SelectedText => "Selected Text Color".into(),
        }
    }

    pub fn xrdb_name(self) -> String {
        self.iterm_name().replace(' ', "_")
    }

    pub fn from_iterm_name(name: &str) -> Option<Self> {
        Self::all().find(|c| c.iterm_name() == name)
    }

    pub fn from_xrdb_name(name: &str) -> Option<Self> {
        Self::all().find(|c| c.xrdb_name() == name)
    }
}

/// Every color a terminal scheme file can carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    pub ansi: Palette,
    pub foreground: Color,
    pub background: Color,
    pub cursor: Option<Color>,
    pub cursor_text: Option<Color>,
    pub bold: Option<Color>,
    pub selection: Option<Color>,
    pub selected_text: Option<Color>,
}

impl ColorTable {
    pub fn new(ansi: Palette, foreground: Color, background: Color) -> Self {
        Self {
            ansi,
            foreground,
            background,
            cursor: None,
            cursor_text: None,
            bold: None,
            selection: None,
            selected_text: None,
        }
    }

    pub fn get(&self, name: NamedColor) -> Option<&Color> {
        match name {
            NamedColor::Ansi(n) => self.ansi.get(n as usize),
            NamedColor::Background => Some(&self.background),
            NamedColor::Foreground => Some(&self.foreground),
            NamedColor::Cursor => self.cursor.as_ref(),
            NamedColor::CursorText => self.cursor_text.as_ref(),
            NamedColor::Bold => self.bold.as_ref(),
            NamedColor::Selection => self.selection.as_ref(),
            NamedColor::SelectedText => self.selected_text.as_ref(),
        }
    }

    /// Present entries in canonical order.
    pub fn entries(&self) -> Vec<(NamedColor, &Color)> {
        NamedColor::all()
            .filter_map(|name| self.get(name).map(|c| (name, c)))
            .collect()
    }
}

impl From<&ColorTable> for ThemeConfig {
    fn from(table: &ColorTable) -> Self {
        ThemeConfig {
            cursor_color: table
                .cursor
                .clone()
                .unwrap_or_else(|| table.foreground.clone()),
            foreground_color: table.foreground.clone(),
            background_color: table.background.clone(),
            palette_overrides: table.ansi.clone(),
        }
    }
}

impl From<&ThemeConfig> for ColorTable {
    fn from(config: &ThemeConfig) -> Self {
        let mut table = ColorTable::new(
            config.palette_overrides.clone(),
            config.foreground_color.clone(),
            config.background_color.clone(),
        );
        table.cursor = Some(config.cursor_color.clone());
        table
    }
}
