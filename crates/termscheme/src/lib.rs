//! # Termscheme - terminal color schemes that follow the system appearance
//!
//! Termscheme keeps a terminal's theme preferences (cursor, foreground,
//! background and the 16-slot ANSI palette) in step with the host's
//! light/dark preference, and converts schemes between terminal formats.
//!
//! ## Core Concepts
//!
//! - [`ThemeConfig`]: the four values a theme writes
//! - [`SchemePair`]: a light and a dark config, picked by [`ColorMode`]
//! - [`PreferenceStore`]: the terminal's key-value settings, injected
//! - [`ColorSchemeHost`]: where the light/dark preference comes from
//! - [`ThemeSwitcher`]: applies the right config now and on every change
//!
//! ## Quick Start
//!
//! ```rust
//! use termscheme::{builtin, MemoryStore, PreferenceStore, SimulatedHost, ThemeSwitcher};
//!
//! let host = SimulatedHost::new(true);
//! let switcher = ThemeSwitcher::new(builtin::moul(), MemoryStore::new());
//! switcher.initialize(&host).unwrap();
//!
//! let bg = switcher.store().get("background-color").unwrap();
//! assert_eq!(bg.as_color().unwrap().as_str(), "#000000");
//! ```
//!
//! ## Converting schemes
//!
//! [`import`] reads iTerm2 presets, xrdb lists, hterm scripts and YAML;
//! [`export`] writes hterm (static or auto-switching), xrdb, kitty,
//! X resources, VS Code and YAML.
//!
//! ```rust
//! use termscheme::{builtin, export, ColorTable};
//!
//! let table = ColorTable::from(builtin::moul().dark());
//! let kitty = export::to_kitty(&table);
//! assert!(kitty.contains("background #000000"));
//! ```

mod color;
pub mod export;
pub mod host;
pub mod import;
mod palette;
pub mod preview;
pub mod scheme;
pub mod store;
mod switcher;

pub use color::{rgb_to_ansi256, Color, Rgb};
pub use host::{ColorSchemeHost, Listener, OsHost, SimulatedHost, Subscription};
pub use palette::{Palette, PaletteError, ANSI_NAMES, PALETTE_SIZE};
pub use scheme::{
    builtin, BuiltinScheme, ColorMode, ColorTable, ConfigError, NamedColor, SchemePair,
    ThemeConfig,
};
pub use store::{
    write_theme, MemoryStore, OscStore, PrefKey, PrefValue, PreferenceStore, StoreError,
};
pub use switcher::ThemeSwitcher;
