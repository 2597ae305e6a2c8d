use std::path::PathBuf;

use termscheme::export::{self, ExportFormat};
use termscheme::import::{self, ImportError};
use termscheme::{builtin, ColorTable, NamedColor, SchemePair, ThemeConfig};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_iterm_and_xrdb_fixtures_agree() {
    let iterm = import::load_path(fixture("moul.itermcolors")).unwrap();
    let xrdb = import::load_path(fixture("moul.xrdb")).unwrap();
    assert_eq!(iterm, xrdb);

    let dark = builtin::moul();
    assert_eq!(iterm.ansi, dark.dark().palette_overrides);
    assert_eq!(iterm.background.as_str(), "#000000");
    assert_eq!(iterm.selection.as_ref().unwrap().as_str(), "#4e4e4e");
}

#[test]
fn test_hterm_fixture_matches_builtin_light() {
    let table = import::load_path(fixture("moul-light.hterm.js")).unwrap();
    assert_eq!(&ThemeConfig::from(&table), builtin::moul().light());
}

#[test]
fn test_iterm_to_xrdb_output() {
    let table = import::load_path(fixture("moul.itermcolors")).unwrap();
    let out = ExportFormat::Xrdb.render("moul", &table).unwrap();
    let expected = std::fs::read_to_string(fixture("moul.xrdb")).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn test_static_hterm_reimports() {
    let config = builtin::manfred_touron().dark().clone();
    let script = export::to_hterm("manfred-touron-dark", &config).unwrap();
    assert!(script.starts_with("// manfred-touron-dark theme for hterm\n"));
    assert_eq!(import::from_hterm(&script).unwrap(), config);
}

#[test]
fn test_dynamic_hterm_script() {
    let pair = builtin::moul();
    let script = export::to_dynamic_hterm("moul", &pair).unwrap();

    assert!(script.contains("const darkScheme = {\n  cursor: '#eeeeee',"));
    assert!(script.contains("  background: '#f9f9f9',"));
    assert!(script.contains("addEventListener('change', setPreferredScheme)"));
    assert!(script.contains("window.toggleMoulTheme = function()"));

    // the dark scheme comes first, so reading it back yields dark
    assert_eq!(&import::from_hterm(&script).unwrap(), pair.dark());
}

#[test]
fn test_yaml_pair_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schemes.yaml");
    let pair = builtin::manfred_touron();
    std::fs::write(&path, pair.to_yaml_string().unwrap()).unwrap();

    assert_eq!(SchemePair::from_path(&path).unwrap(), pair);
}

#[test]
fn test_every_format_renders() {
    let table = ColorTable::from(builtin::moul().dark());
    for format in ExportFormat::ALL {
        let out = format.render("moul", &table).unwrap();
        assert!(out.ends_with('\n'), "{} output lacks final newline", format.name());
        assert!(out.contains("#ff0000"), "{} output lacks ANSI red", format.name());
    }
}

#[test]
fn test_vscode_output() {
    let table = import::load_path(fixture("moul.xrdb")).unwrap();
    let out = export::to_vscode(&table).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let colors = &value["workbench.colorCustomizations"];
    assert_eq!(colors["terminal.ansiBrightWhite"], "#ffffff");
    assert_eq!(colors["terminal.selectionBackground"], "#4e4e4e");
    assert!(out.contains("\n    \"workbench.colorCustomizations\": {\n        \""));
}

#[test]
fn test_cursor_falls_back_to_foreground() {
    let mut table = import::load_path(fixture("moul.xrdb")).unwrap();
    table.cursor = None;
    let config = ThemeConfig::from(&table);
    assert_eq!(config.cursor_color, table.foreground);
    assert_eq!(table.get(NamedColor::Cursor), None);
}

#[test]
fn test_unknown_extension() {
    let err = import::load_path("colors.conf").unwrap_err();
    assert!(matches!(err, ImportError::UnknownFormat(_)));
}

#[test]
fn test_missing_file() {
    let err = import::load_path(fixture("absent.xrdb")).unwrap_err();
    assert!(matches!(err, ImportError::Io { .. }));
    assert!(err.to_string().contains("absent.xrdb"));
}
