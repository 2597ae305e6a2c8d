//! Terminal previews of a scheme.

use console::Style;

use crate::color::{rgb_to_ansi256, Color};
use crate::palette::ANSI_NAMES;
use crate::scheme::{ColorTable, ThemeConfig};
use crate::store::{write_theme, OscStore, StoreError};

const SAMPLES: [(usize, &str); 6] = [
    (1, "Red text sample"),
    (2, "Green text sample"),
    (3, "Yellow text sample"),
    (4, "Blue text sample"),
    (5, "Magenta text sample"),
    (6, "Cyan text sample"),
];

fn fg(color: &Color) -> Style {
    match color.to_rgb() {
        Some(rgb) => Style::new().color256(rgb_to_ansi256(rgb)),
        None => Style::new(),
    }
}

fn swatch(color: &Color) -> Style {
    match color.to_rgb() {
        Some(rgb) => {
            let text = if rgb.luma() > 0.5 {
                Style::new().black()
            } else {
                Style::new().white()
            };
            text.on_color256(rgb_to_ansi256(rgb))
        }
        None => Style::new().reverse(),
    }
}

/// Renders a title, both palette rows as color cells, and sample text.
///
/// Colors are approximated in the 256-color cube so the preview works on
/// terminals without true color. `force` styles the output even when stdout
/// is not a terminal.
pub fn render_swatches(table: &ColorTable, title: &str, force: bool) -> String {
    let styled = |style: Style| style.force_styling(force);

    let bg = swatch(&table.background);
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        styled(fg(&table.foreground).bold()).apply_to(title)
    ));

    for (label, range) in [("Normal Colors:", 0..8), ("Bright Colors:", 8..16)] {
        out.push_str(&format!("{}\n", styled(fg(&table.foreground)).apply_to(label)));
        for slot in range {
            if let Some(color) = table.ansi.get(slot) {
                out.push_str(&format!("{} ", styled(swatch(color)).apply_to(format!(" {:>2} ", slot))));
            }
        }
        out.push_str("\n\n");
    }

    out.push_str(&format!(
        "{}\n",
        styled(bg).apply_to(format!(
            " {} ",
            styled(fg(&table.foreground)).apply_to("Normal text in foreground color")
        ))
    ));
    for (slot, text) in SAMPLES {
        if let Some(color) = table.ansi.get(slot) {
            out.push_str(&format!(
                "  {} {}\n",
                styled(fg(color)).apply_to(text),
                styled(Style::new().dim()).apply_to(format!("({}, {})", ANSI_NAMES[slot], color))
            ));
        }
    }
    out
}

/// The OSC sequences that apply `config` to the running terminal.
pub fn osc_sequences(config: &ThemeConfig) -> Result<String, StoreError> {
    let mut store = OscStore::new(Vec::new());
    write_theme(&mut store, config)?;
    Ok(String::from_utf8_lossy(&store.into_inner()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::builtin;

    #[test]
    fn test_plain_swatches_list_every_slot() {
        let table = ColorTable::from(builtin::moul().dark());
        let out = console::strip_ansi_codes(&render_swatches(&table, "moul", false)).into_owned();
        assert!(out.starts_with("moul\n"));
        assert!(out.contains("Normal Colors:"));
        assert!(out.contains("Bright Colors:"));
        for slot in 0..16 {
            assert!(out.contains(&format!(" {:>2} ", slot)));
        }
        assert!(out.contains("Red text sample (Red, #ff0000)"));
    }

    #[test]
    fn test_forced_swatches_are_styled() {
        let table = ColorTable::from(builtin::moul().dark());
        let out = render_swatches(&table, "moul", true);
        // #ff0000 maps to 196 in the 256-color cube
        assert!(out.contains("\x1b[48;5;196m"));
    }

    #[test]
    fn test_osc_sequences() {
        let out = osc_sequences(builtin::moul().light()).unwrap();
        assert!(out.contains("\x1b]11;rgb:f9/f9/f9\x1b\\"));
        assert_eq!(out.matches("\x1b]").count(), 19);
    }
}
