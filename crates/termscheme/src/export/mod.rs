//! Writing color schemes in terminal and editor formats.
//!
//! hterm scripts are rendered from MiniJinja templates; the line-based
//! formats are written directly from a [`ColorTable`] in canonical entry
//! order (ANSI 0-15, background, foreground, cursor, ...).

mod templates;

use std::str::FromStr;

use minijinja::{context, AutoEscape, Environment, Value};
use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

use crate::scheme::{ColorTable, NamedColor, SchemePair, ThemeConfig};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("encoded JSON is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.add_filter("js", |value: Value| -> String { js_escape(&value.to_string()) });
    env.add_template("hterm", templates::HTERM_STATIC)
        .expect("hterm template compiles");
    env.add_template("hterm-dynamic", templates::HTERM_DYNAMIC)
        .expect("hterm-dynamic template compiles");
    env
});

/// Escapes `raw` for use inside a quoted JavaScript string literal.
fn js_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Output formats for a single scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Hterm,
    Xrdb,
    Kitty,
    Xresources,
    Vscode,
    Yaml,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Hterm,
        ExportFormat::Xrdb,
        ExportFormat::Kitty,
        ExportFormat::Xresources,
        ExportFormat::Vscode,
        ExportFormat::Yaml,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Hterm => "hterm",
            ExportFormat::Xrdb => "xrdb",
            ExportFormat::Kitty => "kitty",
            ExportFormat::Xresources => "xresources",
            ExportFormat::Vscode => "vscode",
            ExportFormat::Yaml => "yaml",
        }
    }

    /// Renders `table` in this format. `name` only appears in hterm headers.
    pub fn render(self, name: &str, table: &ColorTable) -> Result<String, ExportError> {
        match self {
            ExportFormat::Hterm => to_hterm(name, &ThemeConfig::from(table)),
            ExportFormat::Xrdb => Ok(to_xrdb(table)),
            ExportFormat::Kitty => Ok(to_kitty(table)),
            ExportFormat::Xresources => Ok(to_xresources(table)),
            ExportFormat::Vscode => to_vscode(table),
            ExportFormat::Yaml => to_yaml(&ThemeConfig::from(table)),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown export format '{}'", s))
    }
}

/// A static hterm script setting the four theme preferences.
pub fn to_hterm(name: &str, config: &ThemeConfig) -> Result<String, ExportError> {
    let template = TEMPLATES.get_template("hterm")?;
    Ok(template.render(context! { name, theme => config })?)
}

/// An hterm script that follows `prefers-color-scheme` and exposes
/// `window.toggle<Name>Theme()` for manual switching.
pub fn to_dynamic_hterm(name: &str, pair: &SchemePair) -> Result<String, ExportError> {
    let template = TEMPLATES.get_template("hterm-dynamic")?;
    Ok(template.render(context! {
        name,
        ident => toggle_ident(name),
        dark => pair.dark(),
        light => pair.light(),
    })?)
}

/// `moul-light` becomes `MoulLight`.
fn toggle_ident(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// `#define Name value` lines.
pub fn to_xrdb(table: &ColorTable) -> String {
    let mut out = String::new();
    for (name, color) in table.entries() {
        out.push_str(&format!("#define {} {}\n", name.xrdb_name(), color));
    }
    out
}

/// A kitty `.conf` color block.
pub fn to_kitty(table: &ColorTable) -> String {
    let mut out = String::new();
    for (name, color) in table.entries() {
        let key = match name {
            NamedColor::Ansi(n) => format!("color{}", n),
            NamedColor::Foreground => "foreground".into(),
            NamedColor::Background => "background".into(),
            NamedColor::Cursor => "cursor".into(),
            NamedColor::Selection => "selection_background".into(),
            NamedColor::SelectedText => "selection_foreground".into(),
            NamedColor::CursorText | NamedColor::Bold => continue,
        };
        out.push_str(&format!("{} {}\n", key, color));
    }
    out
}

/// An X resources file; bold text uses the bold color or the foreground.
pub fn to_xresources(table: &ColorTable) -> String {
    let mut out = String::from("!\n! Generated by termscheme\n!\n");
    for (name, color) in table.entries() {
        let line = match name {
            NamedColor::Foreground => format!("*.foreground:  {}", color),
            NamedColor::Background => format!("*.background:  {}", color),
            NamedColor::Cursor => format!("*.cursorColor: {}", color),
            NamedColor::Ansi(n) => format!("*.color{}:{:width$}{}", n, "", color, width = if n < 10 { 6 } else { 5 }),
            _ => continue,
        };
        out.push_str(&line);
        out.push('\n');
    }
    let bold = table.bold.as_ref().unwrap_or(&table.foreground);
    out.push_str(&format!("!\n! Bold, Italic, Underline\n*.colorBD:     {}\n", bold));
    out.push_str("!*.colorIT:\n!*.colorUL:\n");
    out
}

#[derive(Serialize)]
struct VscodeSettings {
    #[serde(rename = "workbench.colorCustomizations")]
    colors: serde_json::Map<String, serde_json::Value>,
}

const VSCODE_ANSI: [&str; 16] = [
    "terminal.ansiBlack",
    "terminal.ansiRed",
    "terminal.ansiGreen",
    "terminal.ansiYellow",
    "terminal.ansiBlue",
    "terminal.ansiMagenta",
    "terminal.ansiCyan",
    "terminal.ansiWhite",
    "terminal.ansiBrightBlack",
    "terminal.ansiBrightRed",
    "terminal.ansiBrightGreen",
    "terminal.ansiBrightYellow",
    "terminal.ansiBrightBlue",
    "terminal.ansiBrightMagenta",
    "terminal.ansiBrightCyan",
    "terminal.ansiBrightWhite",
];

/// VS Code `settings.json` fragment under `workbench.colorCustomizations`,
/// indented with four spaces.
pub fn to_vscode(table: &ColorTable) -> Result<String, ExportError> {
    let mut colors = serde_json::Map::new();
    for (name, color) in table.entries() {
        let key = match name {
            NamedColor::Ansi(n) => VSCODE_ANSI[n as usize],
            NamedColor::Foreground => "terminal.foreground",
            NamedColor::Background => "terminal.background",
            NamedColor::Cursor => "terminalCursor.foreground",
            NamedColor::Selection => "terminal.selectionBackground",
            _ => continue,
        };
        colors.insert(key.to_string(), serde_json::Value::from(color.as_str()));
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    VscodeSettings { colors }.serialize(&mut ser)?;
    let mut out = String::from_utf8(buf)?;
    out.push('\n');
    Ok(out)
}

/// The YAML form read back by [`crate::import::from_yaml`].
pub fn to_yaml(config: &ThemeConfig) -> Result<String, ExportError> {
    Ok(serde_yaml::to_string(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::import::{from_hterm, from_xrdb};
    use crate::scheme::builtin;

    fn moul_dark_table() -> ColorTable {
        ColorTable::from(builtin::moul().dark())
    }

    #[test]
    fn test_hterm_static_reads_back() {
        let config = builtin::manfred_touron().light().clone();
        let script = to_hterm("ManfredTouron-Light", &config).unwrap();
        assert!(script.starts_with("// ManfredTouron-Light theme for hterm\n"));
        assert!(script.contains(r##"t.prefs_.set("background-color", "#fafafa");"##));
        assert!(script.ends_with("]);\n"));
        assert_eq!(from_hterm(&script).unwrap(), config);
    }

    #[test]
    fn test_dynamic_hterm() {
        let pair = builtin::manfred_touron();
        let script = to_dynamic_hterm("ManfredTouron", &pair).unwrap();
        assert!(script.contains("window.toggleManfredTouronTheme = function()"));
        assert!(script.contains("  cursor: 'rgba(238,238,238, 0.5)',\n"));
        assert!(script.contains(
            "colors: ['#222222', '#ff0000', '#51ff0f', '#e7a800', '#3950d7', '#d336b1', '#66b2ff', '#cecece', \
             '#4e4e4e', '#ff008b', '#62c750', '#f4ff00', '#70a5ed', '#b867e6', '#00d4fc', '#ffffff']"
        ));
        assert!(script.contains("addEventListener('change', setPreferredScheme)"));
        // The dark member comes first, so it is what a re-import sees.
        assert_eq!(from_hterm(&script).unwrap(), *pair.dark());
    }

    #[test]
    fn test_hterm_escapes_quotes_in_colors() {
        let mut pair = builtin::moul();
        let mut dark = pair.dark().clone();
        dark.foreground_color = Color::new("a'b");
        dark.background_color = Color::new(r#"c"d\e"#);
        pair = SchemePair::new(pair.light().clone(), dark.clone());

        let script = to_hterm("quoted", &dark).unwrap();
        assert!(script.contains(r#"t.prefs_.set("foreground-color", "a\'b");"#));
        assert!(script.contains(r#"t.prefs_.set("background-color", "c\"d\\e");"#));

        let script = to_dynamic_hterm("quoted", &pair).unwrap();
        assert!(script.contains(r#"  foreground: 'a\'b',"#));
        assert!(script.contains(r#"  background: 'c\"d\\e',"#));
    }

    #[test]
    fn test_js_escape() {
        assert_eq!(js_escape("#fafafa"), "#fafafa");
        assert_eq!(js_escape("rgba(1,2,3, 0.5)"), "rgba(1,2,3, 0.5)");
        assert_eq!(js_escape("a\nb\u{2028}"), "a\\nb\\u2028");
    }

    #[test]
    fn test_toggle_ident() {
        assert_eq!(toggle_ident("ManfredTouron"), "ManfredTouron");
        assert_eq!(toggle_ident("moul-light"), "MoulLight");
        assert_eq!(toggle_ident("  "), "");
    }

    #[test]
    fn test_xrdb_reads_back() {
        let table = moul_dark_table();
        let xrdb = to_xrdb(&table);
        assert!(xrdb.starts_with("#define Ansi_0_Color #222222\n"));
        assert!(xrdb.contains("#define Cursor_Color #eeeeee\n"));
        assert_eq!(from_xrdb(&xrdb).unwrap(), table);
    }

    #[test]
    fn test_kitty() {
        let mut table = moul_dark_table();
        table.selection = Some("#444444".into());
        table.bold = Some("#ffffff".into());
        let conf = to_kitty(&table);
        assert!(conf.starts_with("color0 #222222\ncolor1 #ff0000\n"));
        assert!(conf.contains("\nbackground #000000\nforeground #eeeeee\ncursor #eeeeee\n"));
        assert!(conf.contains("selection_background #444444\n"));
        assert!(!conf.contains("bold"));
    }

    #[test]
    fn test_xresources() {
        let out = to_xresources(&moul_dark_table());
        assert!(out.contains("*.color0:      #222222\n"));
        assert!(out.contains("*.color15:     #ffffff\n"));
        assert!(out.contains("*.background:  #000000\n"));
        assert!(out.contains("*.cursorColor: #eeeeee\n"));
        assert!(out.contains("*.colorBD:     #eeeeee\n"));
    }

    #[test]
    fn test_vscode() {
        let out = to_vscode(&moul_dark_table()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let colors = &value["workbench.colorCustomizations"];
        assert_eq!(colors["terminal.ansiBrightWhite"], "#ffffff");
        assert_eq!(colors["terminal.background"], "#000000");
        assert_eq!(colors["terminalCursor.foreground"], "#eeeeee");
        assert!(out.contains("\n    \"workbench.colorCustomizations\": {\n        \""));
    }

    #[test]
    fn test_yaml_reads_back() {
        let config = builtin::moul().light().clone();
        let yaml = to_yaml(&config).unwrap();
        assert_eq!(ThemeConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("Kitty".parse::<ExportFormat>(), Ok(ExportFormat::Kitty));
        assert!("iterm".parse::<ExportFormat>().is_err());
    }
}
