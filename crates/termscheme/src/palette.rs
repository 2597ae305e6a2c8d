//! The 16-slot ANSI palette.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

/// Number of ANSI color slots a palette override covers.
pub const PALETTE_SIZE: usize = 16;

/// Names of the ANSI slots, indexed by slot number.
pub const ANSI_NAMES: [&str; PALETTE_SIZE] = [
    "Black",
    "Red",
    "Green",
    "Yellow",
    "Blue",
    "Magenta",
    "Cyan",
    "White",
    "BrightBlack",
    "BrightRed",
    "BrightGreen",
    "BrightYellow",
    "BrightBlue",
    "BrightMagenta",
    "BrightCyan",
    "BrightWhite",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette must have exactly 16 colors, found {found}")]
    WrongLength { found: usize },
}

/// Remaps the 16 standard ANSI slots to custom colors.
///
/// Position is significant: index `n` is ANSI color `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette([Color; PALETTE_SIZE]);

impl Palette {
    pub fn new(colors: [Color; PALETTE_SIZE]) -> Self {
        Self(colors)
    }

    /// Builds a palette from string literals.
    pub fn from_strs(colors: [&str; PALETTE_SIZE]) -> Self {
        Self(colors.map(Color::new))
    }

    /// Color at `slot`, or `None` past slot 15.
    pub fn get(&self, slot: usize) -> Option<&Color> {
        self.0.get(slot)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<Color> {
        self.0.to_vec()
    }

    /// The normal (0-7) half of the palette.
    pub fn normal(&self) -> &[Color] {
        &self.0[..8]
    }

    /// The bright (8-15) half of the palette.
    pub fn bright(&self) -> &[Color] {
        &self.0[8..]
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        let found = colors.len();
        colors
            .try_into()
            .map(Self)
            .map_err(|_| PaletteError::WrongLength { found })
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.0.into()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
