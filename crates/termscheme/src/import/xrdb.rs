//! xrdb `#define` lists.

use std::collections::HashMap;

use super::{assemble, ImportError};
use crate::color::Color;
use crate::scheme::{ColorTable, NamedColor};

/// Parses `#define Ansi_0_Color #000000` style lines.
///
/// Unknown names and any other lines are ignored; a name defined twice
/// keeps its last value.
pub fn from_xrdb(source: &str) -> Result<ColorTable, ImportError> {
    let mut colors = HashMap::new();
    for line in source.lines() {
        let Some(rest) = line.trim().strip_prefix("#define") else {
            continue;
        };
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let Some((name, value)) = rest.trim_start().split_once(char::is_whitespace) else {
            continue;
        };
        match NamedColor::from_xrdb_name(name) {
            Some(named) => {
                colors.insert(named, Color::new(value.trim()));
            }
            None => tracing::trace!(name, "skipping unknown xrdb define"),
        }
    }
    assemble(colors)
}
