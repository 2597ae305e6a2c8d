//! Reading color schemes from terminal theme files.
//!
//! | format | extension | reader |
//! |--------|-----------|--------|
//! | iTerm2 color preset (XML plist) | `.itermcolors` | [`from_iterm`] |
//! | xrdb `#define` list | `.xrdb` | [`from_xrdb`] |
//! | hterm profile script | `.js` | [`from_hterm`] |
//! | YAML [`ThemeConfig`] | `.yaml`, `.yml` | [`from_yaml`] |

mod hterm;
mod iterm;
mod xrdb;

pub use hterm::from_hterm;
pub use iterm::from_iterm;
pub use xrdb::from_xrdb;

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::color::Color;
use crate::palette::{Palette, PaletteError, PALETTE_SIZE};
use crate::scheme::{ColorTable, NamedColor, ThemeConfig};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid iTerm2 color preset: {0}")]
    Plist(String),
    #[error("scheme is missing '{name}'")]
    MissingColor { name: String },
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error("cannot tell the scheme format of '{0}'")]
    UnknownFormat(String),
    #[error("invalid YAML scheme: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Scheme file formats that can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Iterm,
    Xrdb,
    Hterm,
    Yaml,
}

impl SourceFormat {
    /// Guesses the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "itermcolors" => Some(SourceFormat::Iterm),
            "xrdb" => Some(SourceFormat::Xrdb),
            "js" => Some(SourceFormat::Hterm),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            _ => None,
        }
    }

    pub fn parse(self, source: &str) -> Result<ColorTable, ImportError> {
        match self {
            SourceFormat::Iterm => from_iterm(source),
            SourceFormat::Xrdb => from_xrdb(source),
            SourceFormat::Hterm => from_hterm(source).map(|c| ColorTable::from(&c)),
            SourceFormat::Yaml => from_yaml(source).map(|c| ColorTable::from(&c)),
        }
    }
}

/// Parses a YAML [`ThemeConfig`].
pub fn from_yaml(source: &str) -> Result<ThemeConfig, ImportError> {
    Ok(ThemeConfig::from_yaml_str(source)?)
}

/// Reads a scheme file, choosing the parser by extension.
pub fn load_path(path: impl AsRef<Path>) -> Result<ColorTable, ImportError> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)
        .ok_or_else(|| ImportError::UnknownFormat(path.display().to_string()))?;
    let source = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, "loading scheme");
    format.parse(&source)
}

/// Builds a table from named colors; ANSI 0-15, foreground and background
/// must all be present.
fn assemble(mut colors: HashMap<NamedColor, Color>) -> Result<ColorTable, ImportError> {
    let mut take = |name: NamedColor| {
        colors.remove(&name).ok_or_else(|| ImportError::MissingColor {
            name: name.iterm_name(),
        })
    };
    let ansi = (0..PALETTE_SIZE as u8)
        .map(|n| take(NamedColor::Ansi(n)))
        .collect::<Result<Vec<_>, _>>()?;
    let foreground = take(NamedColor::Foreground)?;
    let background = take(NamedColor::Background)?;

    let mut table = ColorTable::new(Palette::try_from(ansi)?, foreground, background);
    table.cursor = colors.remove(&NamedColor::Cursor);
    table.cursor_text = colors.remove(&NamedColor::CursorText);
    table.bold = colors.remove(&NamedColor::Bold);
    table.selection = colors.remove(&NamedColor::Selection);
    table.selected_text = colors.remove(&NamedColor::SelectedText);
    Ok(table)
}
