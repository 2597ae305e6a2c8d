//! In-memory preference store.

use std::collections::HashMap;

use super::{PrefKey, PrefValue, PreferenceStore, StoreError};

/// Checks a value before it is stored; an `Err` carries the rejection reason.
pub type Validator = fn(&str, &PrefValue) -> Result<(), String>;

/// A [`PreferenceStore`] backed by a `HashMap`.
///
/// By default every value is accepted. [`MemoryStore::strict`] mirrors a
/// terminal that refuses colors it cannot parse.
///
/// # Example
///
/// ```rust
/// use termscheme::{Color, MemoryStore, PrefValue, PreferenceStore};
///
/// let mut store = MemoryStore::new();
/// store.set("background-color", PrefValue::Color(Color::new("#000000"))).unwrap();
/// assert_eq!(
///     store.get("background-color"),
///     Some(PrefValue::Color(Color::new("#000000")))
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, PrefValue>,
    validator: Option<Validator>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects unparseable colors under the theme keys.
    pub fn strict() -> Self {
        Self::with_validator(validate_theme_value)
    }

    pub fn with_validator(validator: Validator) -> Self {
        Self {
            values: HashMap::new(),
            validator: Some(validator),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: PrefValue) -> Result<(), StoreError> {
        if let Some(validate) = self.validator {
            validate(key, &value).map_err(|reason| StoreError::rejected(key, &value, reason))?;
        }
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

fn validate_theme_value(key: &str, value: &PrefValue) -> Result<(), String> {
    let Some(pref) = PrefKey::from_name(key) else {
        return Ok(());
    };
    match (pref, value) {
        (PrefKey::PaletteOverrides, PrefValue::Palette(palette)) => {
            match palette.iter().position(|c| c.to_rgb().is_none()) {
                Some(slot) => Err(format!("palette slot {} is not a color", slot)),
                None => Ok(()),
            }
        }
        (PrefKey::PaletteOverrides, PrefValue::Color(_)) => Err("expected a palette".into()),
        (_, PrefValue::Color(color)) if color.to_rgb().is_none() => Err("not a color".into()),
        (_, PrefValue::Color(_)) => Ok(()),
        (_, PrefValue::Palette(_)) => Err("expected a single color".into()),
    }
}
