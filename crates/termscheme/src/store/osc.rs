//! A preference store that drives a live terminal with OSC sequences.

use std::collections::HashMap;
use std::io::Write;

use crate::color::{Color, Rgb};

use super::{PrefKey, PrefValue, PreferenceStore, StoreError};

const OSC: &str = "\x1b]";
const ST: &str = "\x1b\\";

/// Writes xterm color-control sequences for each preference it is given.
///
/// | key | sequence |
/// |-----|----------|
/// | `foreground-color` | OSC 10 |
/// | `background-color` | OSC 11 |
/// | `cursor-color` | OSC 12 |
/// | `color-palette-overrides` | OSC 4, one per slot |
///
/// The terminal cannot be read back, so `get` returns the last value this
/// store wrote.
#[derive(Debug)]
pub struct OscStore<W: Write> {
    out: W,
    written: HashMap<String, PrefValue>,
}

impl<W: Write> OscStore<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            written: HashMap::new(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn sequence(key: &str, value: &PrefValue) -> Result<String, StoreError> {
        let pref = PrefKey::from_name(key)
            .ok_or_else(|| StoreError::rejected(key, value, "no OSC sequence for this key"))?;
        let spec = |color: &Color| -> Result<String, StoreError> {
            color
                .to_rgb()
                .map(Rgb::to_x11)
                .ok_or_else(|| StoreError::rejected(key, color, "not a color"))
        };
        match (pref, value) {
            (PrefKey::ForegroundColor, PrefValue::Color(c)) => Ok(format!("{OSC}10;{}{ST}", spec(c)?)),
            (PrefKey::BackgroundColor, PrefValue::Color(c)) => Ok(format!("{OSC}11;{}{ST}", spec(c)?)),
            (PrefKey::CursorColor, PrefValue::Color(c)) => Ok(format!("{OSC}12;{}{ST}", spec(c)?)),
            (PrefKey::PaletteOverrides, PrefValue::Palette(palette)) => {
                let mut seq = String::new();
                for (slot, color) in palette.iter().enumerate() {
                    seq.push_str(&format!("{OSC}4;{};{}{ST}", slot, spec(color)?));
                }
                Ok(seq)
            }
            _ => Err(StoreError::rejected(key, value, "wrong value kind for key")),
        }
    }
}

impl<W: Write> PreferenceStore for OscStore<W> {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.written.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: PrefValue) -> Result<(), StoreError> {
        let seq = Self::sequence(key, &value)?;
        self.out
            .write_all(seq.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|source| StoreError::Io {
                key: key.to_string(),
                source,
            })?;
        self.written.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::scheme::builtin;
    use crate::store::write_theme;

    fn output(store: &OscStore<Vec<u8>>) -> String {
        String::from_utf8(store.get_ref().clone()).unwrap()
    }

    #[test]
    fn test_background_sequence() {
        let mut store = OscStore::new(Vec::new());
        store
            .set("background-color", PrefValue::Color(Color::new("#f9f9f9")))
            .unwrap();
        assert_eq!(output(&store), "\x1b]11;rgb:f9/f9/f9\x1b\\");
        assert_eq!(
            store.get("background-color"),
            Some(PrefValue::Color(Color::new("#f9f9f9")))
        );
    }

    #[test]
    fn test_functional_cursor_color() {
        let mut store = OscStore::new(Vec::new());
        store
            .set(
                "cursor-color",
                PrefValue::Color(Color::new("rgba(238,238,238, 0.5)")),
            )
            .unwrap();
        assert_eq!(output(&store), "\x1b]12;rgb:ee/ee/ee\x1b\\");
    }

    #[test]
    fn test_palette_sequences() {
        let mut store = OscStore::new(Vec::new());
        let palette = builtin::moul().dark().palette_overrides.clone();
        store
            .set("color-palette-overrides", PrefValue::Palette(palette))
            .unwrap();
        let out = output(&store);
        assert!(out.starts_with("\x1b]4;0;rgb:22/22/22\x1b\\\x1b]4;1;rgb:ff/00/00"));
        assert!(out.ends_with("\x1b]4;15;rgb:ff/ff/ff\x1b\\"));
        assert_eq!(out.matches("\x1b]4;").count(), 16);
    }

    #[test]
    fn test_rejects_unknown_key_and_bad_color() {
        let mut store = OscStore::new(Vec::new());
        assert!(store
            .set("font-size", PrefValue::Color(Color::new("#000000")))
            .is_err());
        assert!(store
            .set("background-color", PrefValue::Color(Color::new("black")))
            .is_err());
        assert!(store
            .set(
                "background-color",
                PrefValue::Palette(Palette::from_strs(["#000000"; 16]))
            )
            .is_err());
        assert!(store.get_ref().is_empty());
    }

    #[test]
    fn test_write_theme_order() {
        let mut store = OscStore::new(Vec::new());
        write_theme(&mut store, builtin::moul().light()).unwrap();
        let out = output(&store);
        let cursor = out.find("\x1b]12;").unwrap();
        let fg = out.find("\x1b]10;").unwrap();
        let bg = out.find("\x1b]11;").unwrap();
        let palette = out.find("\x1b]4;").unwrap();
        assert!(cursor < fg && fg < bg && bg < palette);
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_failure_is_reported() {
        let mut store = OscStore::new(Broken);
        let err = store
            .set("foreground-color", PrefValue::Color(Color::new("#ffffff")))
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(store.get("foreground-color").is_none());
    }
}
