//! Theme configurations and the light/dark pairs built from them.
//!
//! This module provides:
//!
//! - [`ThemeConfig`]: cursor, foreground, background and palette overrides
//! - [`SchemePair`]: a light/dark pair of configs selected by [`ColorMode`]
//! - [`ColorTable`]: the richer color record used for import and export
//! - [`builtin`]: the schemes shipped with the crate

pub mod builtin;
mod config;
mod pair;
mod table;

pub use builtin::BuiltinScheme;
pub use config::ThemeConfig;
pub use pair::{ColorMode, ConfigError, SchemePair};
pub use table::{ColorTable, NamedColor};
