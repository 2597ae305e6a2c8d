//! Script templates for hterm output.

pub(super) const HTERM_STATIC: &str = r#"// {{ name }} theme for hterm
t.prefs_.set("cursor-color", "{{ theme.cursor|js }}");
t.prefs_.set("foreground-color", "{{ theme.foreground|js }}");
t.prefs_.set("background-color", "{{ theme.background|js }}");
t.prefs_.set("color-palette-overrides", [{% for c in theme.colors %}"{{ c|js }}"{% if not loop.last %}, {% endif %}{% endfor %}]);
"#;

pub(super) const HTERM_DYNAMIC: &str = r#"// {{ name }} Dynamic Theme for hterm/Blink Shell
// Automatically switches between light and dark themes based on system preferences

// Dark theme configuration
const darkScheme = {
  cursor: '{{ dark.cursor|js }}',
  foreground: '{{ dark.foreground|js }}',
  background: '{{ dark.background|js }}',
  colors: [{% for c in dark.colors %}'{{ c|js }}'{% if not loop.last %}, {% endif %}{% endfor %}]
};

// Light theme configuration
const lightScheme = {
  cursor: '{{ light.cursor|js }}',
  foreground: '{{ light.foreground|js }}',
  background: '{{ light.background|js }}',
  colors: [{% for c in light.colors %}'{{ c|js }}'{% if not loop.last %}, {% endif %}{% endfor %}]
};

function applyTheme(theme) {
  t.prefs_.set('cursor-color', theme.cursor);
  t.prefs_.set('foreground-color', theme.foreground);
  t.prefs_.set('background-color', theme.background);
  if (theme.colors) {
    t.prefs_.set('color-palette-overrides', theme.colors);
  }
}

function setPreferredScheme() {
  const isDarkMode = window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches;
  applyTheme(isDarkMode ? darkScheme : lightScheme);
}

setPreferredScheme();

if (window.matchMedia) {
  window.matchMedia('(prefers-color-scheme: dark)').addEventListener('change', setPreferredScheme);
}

// Manual override
window.toggle{{ ident }}Theme = function() {
  const currentBackground = t.prefs_.get('background-color');
  if (currentBackground === darkScheme.background) {
    applyTheme(lightScheme);
  } else {
    applyTheme(darkScheme);
  }
};
"#;
