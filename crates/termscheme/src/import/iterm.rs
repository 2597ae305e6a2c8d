//! iTerm2 `.itermcolors` presets.
//!
//! A preset is an XML property list: a top-level `<dict>` mapping names such
//! as `Ansi 4 Color` to nested `<dict>`s of `Red Component`,
//! `Green Component` and `Blue Component` reals in `0.0..=1.0`.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{assemble, ImportError};
use crate::color::{Color, Rgb};
use crate::scheme::{ColorTable, NamedColor};

type Components = HashMap<String, f64>;

/// Parses an iTerm2 color preset.
///
/// Channels become `#rrggbb` by truncating `component * 255`. Entries
/// without a full set of RGB components, and unknown entries, are skipped.
pub fn from_iterm(source: &str) -> Result<ColorTable, ImportError> {
    let entries = read_plist(source)?;

    let mut colors = HashMap::new();
    for (entry, components) in &entries {
        let Some(named) = NamedColor::from_iterm_name(entry) else {
            tracing::trace!(entry, "skipping unknown iTerm2 entry");
            continue;
        };
        let channel = |name: &str| components.get(name).copied();
        let (Some(r), Some(g), Some(b)) = (
            channel("Red Component"),
            channel("Green Component"),
            channel("Blue Component"),
        ) else {
            continue;
        };
        colors.insert(named, Color::from(Rgb::from_unit(r, g, b)));
    }
    assemble(colors)
}

fn plist_error(err: impl std::fmt::Display) -> ImportError {
    ImportError::Plist(err.to_string())
}

/// Collects the numeric components of every second-level dict, keyed by
/// the top-level entry name.
fn read_plist(source: &str) -> Result<HashMap<String, Components>, ImportError> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut entries: HashMap<String, Components> = HashMap::new();
    let mut depth = 0usize;
    let mut element: Option<Vec<u8>> = None;
    let mut entry: Option<String> = None;
    let mut component: Option<String> = None;

    loop {
        match reader.read_event().map_err(plist_error)? {
            Event::Start(e) => match e.name().as_ref() {
                b"dict" => {
                    depth += 1;
                    element = None;
                }
                other => element = Some(other.to_vec()),
            },
            Event::End(e) => {
                if e.name().as_ref() == b"dict" {
                    depth = depth.saturating_sub(1);
                    component = None;
                }
                element = None;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(plist_error)?;
                match (depth, element.as_deref()) {
                    (1, Some(b"key")) => entry = Some(text.into_owned()),
                    (2, Some(b"key")) => component = Some(text.into_owned()),
                    (2, Some(b"real" | b"integer")) => {
                        let (Some(entry), Some(component)) = (entry.as_ref(), component.take())
                        else {
                            continue;
                        };
                        let value = text.trim().parse::<f64>().map_err(|_| {
                            ImportError::Plist(format!("'{}' of '{}' is not a number", component, entry))
                        })?;
                        entries
                            .entry(entry.clone())
                            .or_default()
                            .insert(component, value);
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if entries.is_empty() {
        return Err(ImportError::Plist("no color dictionaries found".into()));
    }
    Ok(entries)
}
