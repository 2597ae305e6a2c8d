//! Light/dark scheme pairs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::ThemeConfig;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Maps a host query result to a mode. An unanswerable query means light.
    pub fn from_preference(prefers_dark: Option<bool>) -> Self {
        Self::from_dark(prefers_dark.unwrap_or(false))
    }

    pub fn opposite(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(format!("unknown color mode '{}' (expected light or dark)", s)),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scheme file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scheme file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A light and a dark [`ThemeConfig`], selected by [`ColorMode`].
///
/// Both configs are fixed at construction and only ever read afterwards.
///
/// # Example
///
/// ```rust
/// use termscheme::{builtin, ColorMode};
///
/// let pair = builtin::moul();
/// assert_eq!(pair.get(ColorMode::Dark).background_color.as_str(), "#000000");
/// assert_eq!(pair.get(ColorMode::Light).background_color.as_str(), "#f9f9f9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemePair {
    light: ThemeConfig,
    dark: ThemeConfig,
}

impl SchemePair {
    pub fn new(light: ThemeConfig, dark: ThemeConfig) -> Self {
        Self { light, dark }
    }

    pub fn light(&self) -> &ThemeConfig {
        &self.light
    }

    pub fn dark(&self) -> &ThemeConfig {
        &self.dark
    }

    /// The member of the pair for `mode`.
    pub fn get(&self, mode: ColorMode) -> &ThemeConfig {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Parses a pair from YAML with top-level `light` and `dark` keys.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads and parses a YAML pair file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
