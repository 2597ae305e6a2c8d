//! Subcommand handlers.
//!
//! Handlers write their output to the given writer so they can run against
//! a buffer in tests; `main` passes stdout.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use termscheme::export::{self, ExportFormat};
use termscheme::host::ColorSchemeHost;
use termscheme::{
    import, preview, BuiltinScheme, ColorMode, ColorTable, OsHost, OscStore, SchemePair,
    ThemeConfig, ThemeSwitcher,
};
use tracing::{debug, info, warn};

use crate::cli::SchemeArgs;

/// The scheme name derived from a file name: `moul-light.hterm.js` gives
/// `moul-light`.
pub fn default_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('.').next())
        .filter(|n| !n.is_empty())
        .unwrap_or("scheme")
        .to_string()
}

fn load_table(path: &Path) -> Result<ColorTable> {
    import::load_path(path).with_context(|| format!("cannot load scheme {}", path.display()))
}

fn load_config(path: &Path) -> Result<ThemeConfig> {
    load_table(path).map(|table| ThemeConfig::from(&table))
}

/// Resolves the pair selected by the scheme flags.
pub fn load_pair(args: &SchemeArgs) -> Result<SchemePair> {
    if let Some(path) = &args.pair {
        return SchemePair::from_path(path)
            .with_context(|| format!("cannot load scheme pair {}", path.display()));
    }
    if let (Some(dark), Some(light)) = (&args.dark, &args.light) {
        return Ok(SchemePair::new(load_config(light)?, load_config(dark)?));
    }
    let builtin = args.builtin.unwrap_or(BuiltinScheme::Moul);
    debug!(scheme = builtin.name(), "using built-in scheme");
    Ok(builtin.pair())
}

pub fn convert(
    input: &Path,
    format: ExportFormat,
    name: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let table = load_table(input)?;
    let name = name.map(str::to_string).unwrap_or_else(|| default_name(input));
    let rendered = format
        .render(&name, &table)
        .with_context(|| format!("cannot render {} as {}", input.display(), format.name()))?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

pub fn dynamic(
    dark: &Path,
    light: &Path,
    name: &str,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let pair = SchemePair::new(load_config(light)?, load_config(dark)?);
    let script = export::to_dynamic_hterm(name, &pair)?;
    match output {
        Some(path) => {
            std::fs::write(path, script)
                .with_context(|| format!("cannot write {}", path.display()))?;
            info!(path = %path.display(), "wrote dynamic hterm script");
        }
        None => out.write_all(script.as_bytes())?,
    }
    Ok(())
}

pub fn preview(input: &Path, osc: bool, out: &mut dyn Write) -> Result<()> {
    let table = load_table(input)?;
    let text = if osc {
        preview::osc_sequences(&ThemeConfig::from(&table))?
    } else {
        preview::render_swatches(&table, &default_name(input), false)
    };
    out.write_all(text.as_bytes())?;
    Ok(())
}

/// Applies the pair once; `mode` overrides the host preference.
pub fn apply<W: Write + 'static>(
    pair: SchemePair,
    mode: Option<ColorMode>,
    host: &dyn ColorSchemeHost,
    out: W,
) -> Result<ColorMode> {
    let switcher = ThemeSwitcher::new(pair, OscStore::new(out));
    let mode = match mode {
        Some(mode) => {
            switcher.apply_mode(mode)?;
            mode
        }
        None => switcher.select_and_apply(host)?,
    };
    info!(%mode, "applied color scheme");
    Ok(mode)
}

/// Applies the pair, then re-applies whenever a poll of `host` sees the
/// system setting change.
///
/// Runs until interrupted when `polls` is `None`.
pub fn watch<W: Write + 'static>(
    pair: SchemePair,
    host: &OsHost,
    interval: Duration,
    out: W,
    polls: Option<u64>,
) -> Result<()> {
    let switcher = ThemeSwitcher::new(pair, OscStore::new(out));
    let subscription = switcher.initialize(host)?;
    info!(
        mode = ?switcher.current_mode(),
        interval_ms = interval.as_millis() as u64,
        "watching system color scheme"
    );

    let mut remaining = polls;
    while remaining != Some(0) {
        std::thread::sleep(interval);
        for err in host.poll() {
            warn!(key = err.key(), error = %err, "failed to re-apply color scheme");
        }
        remaining = remaining.map(|n| n - 1);
    }

    if let Some(subscription) = subscription {
        subscription.unsubscribe();
    }
    Ok(())
}

pub fn list(out: &mut dyn Write) -> Result<()> {
    for scheme in BuiltinScheme::ALL {
        writeln!(out, "{}", scheme.name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use termscheme::SimulatedHost;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../termscheme/tests/fixtures")
            .join(name)
    }

    #[test]
    fn test_default_name() {
        assert_eq!(default_name(Path::new("dir/moul-light.hterm.js")), "moul-light");
        assert_eq!(default_name(Path::new("moul.itermcolors")), "moul");
        assert_eq!(default_name(Path::new(".hidden")), "scheme");
    }

    #[test]
    fn test_convert_to_kitty() {
        let mut out = Vec::new();
        convert(&fixture("moul.itermcolors"), ExportFormat::Kitty, None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("color0 #222222\n"));
        assert!(text.contains("background #000000\n"));
    }

    #[test]
    fn test_convert_missing_input() {
        let mut out = Vec::new();
        let err = convert(Path::new("nope.xrdb"), ExportFormat::Yaml, None, &mut out).unwrap_err();
        assert!(err.to_string().contains("nope.xrdb"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_dynamic_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("moul.js");
        let mut out = Vec::new();
        dynamic(
            &fixture("moul.xrdb"),
            &fixture("moul-light.hterm.js"),
            "moul",
            Some(&target),
            &mut out,
        )
        .unwrap();

        assert!(out.is_empty());
        let script = std::fs::read_to_string(target).unwrap();
        assert!(script.contains("window.toggleMoulTheme"));
        assert!(script.contains("background: '#f9f9f9'"));
    }

    #[test]
    fn test_preview_osc() {
        let mut out = Vec::new();
        preview(&fixture("moul-light.hterm.js"), true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b]11;rgb:f9/f9/f9\x1b\\"));
    }

    #[test]
    fn test_load_pair_sources() {
        let pair = load_pair(&SchemeArgs::default()).unwrap();
        assert_eq!(pair, termscheme::builtin::moul());

        let args = SchemeArgs {
            dark: Some(fixture("moul.xrdb")),
            light: Some(fixture("moul-light.hterm.js")),
            ..SchemeArgs::default()
        };
        let pair = load_pair(&args).unwrap();
        assert_eq!(pair.light(), termscheme::builtin::moul().light());
        assert_eq!(pair.dark().background_color.as_str(), "#000000");
    }

    #[test]
    fn test_apply_follows_host_unless_forced() {
        let buf = SharedBuf::default();
        let mode = apply(
            termscheme::builtin::moul(),
            None,
            &SimulatedHost::new(true),
            buf.clone(),
        )
        .unwrap();
        assert_eq!(mode, ColorMode::Dark);
        assert!(buf.text().contains("\x1b]11;rgb:00/00/00\x1b\\"));

        let buf = SharedBuf::default();
        let mode = apply(
            termscheme::builtin::moul(),
            Some(ColorMode::Light),
            &SimulatedHost::new(true),
            buf.clone(),
        )
        .unwrap();
        assert_eq!(mode, ColorMode::Light);
        assert!(buf.text().contains("\x1b]11;rgb:f9/f9/f9\x1b\\"));
    }

    static DETECTIONS: AtomicUsize = AtomicUsize::new(0);

    fn light_then_dark() -> ColorMode {
        ColorMode::from_dark(DETECTIONS.fetch_add(1, Ordering::SeqCst) > 0)
    }

    #[test]
    fn test_watch_reapplies_on_change() {
        let buf = SharedBuf::default();
        let host = OsHost::with_detector(light_then_dark);
        watch(
            termscheme::builtin::moul(),
            &host,
            Duration::from_millis(1),
            buf.clone(),
            Some(2),
        )
        .unwrap();

        let text = buf.text();
        let light = text.find("\x1b]11;rgb:f9/f9/f9\x1b\\").unwrap();
        let dark = text.find("\x1b]11;rgb:00/00/00\x1b\\").unwrap();
        assert!(light < dark);
        assert_eq!(text.matches("\x1b]11;").count(), 2);
    }

    #[test]
    fn test_list() {
        let mut out = Vec::new();
        list(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "manfred-touron\nmoul\n");
    }
}
