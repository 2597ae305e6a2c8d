//! Host backed by the operating system's appearance setting.

use std::cell::Cell;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::{ColorSchemeHost, Listener, ListenerSet, Subscription};
use crate::scheme::ColorMode;
use crate::store::StoreError;

type ThemeDetector = fn() -> ColorMode;

/// Reads the OS light/dark setting through `dark-light`.
///
/// The OS offers no push notification here, so changes are found by calling
/// [`OsHost::poll`] periodically; each detected change is dispatched to the
/// subscribed listeners.
#[derive(Debug)]
pub struct OsHost {
    detector: ThemeDetector,
    last_seen: Cell<Option<ColorMode>>,
    listeners: ListenerSet,
}

impl OsHost {
    pub fn new() -> Self {
        Self::with_detector(os_theme_detector)
    }

    /// Uses `detector` instead of asking the OS.
    ///
    /// This is useful for testing or when you want to force a specific color mode.
    pub fn with_detector(detector: ThemeDetector) -> Self {
        Self {
            detector,
            last_seen: Cell::new(None),
            listeners: ListenerSet::default(),
        }
    }

    pub fn detect(&self) -> ColorMode {
        (self.detector)()
    }

    /// Re-detects the mode and notifies listeners if it changed since the
    /// last query or poll.
    ///
    /// The first observation only records a baseline. Returns the failures
    /// reported by listeners.
    pub fn poll(&self) -> Vec<StoreError> {
        let mode = self.detect();
        match self.last_seen.replace(Some(mode)) {
            Some(previous) if previous != mode => {
                tracing::debug!(from = %previous, to = %mode, "system color scheme changed");
                self.listeners.dispatch(mode == ColorMode::Dark)
            }
            _ => Vec::new(),
        }
    }
}

impl Default for OsHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeHost for OsHost {
    fn prefers_dark(&self) -> Option<bool> {
        let mode = self.detect();
        self.last_seen.set(Some(mode));
        Some(mode == ColorMode::Dark)
    }

    fn subscribe(&self, listener: Listener) -> Option<Subscription> {
        Some(self.listeners.add(listener))
    }
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
