//! An in-process host whose preference is set programmatically.

use std::cell::Cell;

use super::{ColorSchemeHost, Listener, ListenerSet, Subscription};
use crate::store::StoreError;

/// A host driven by the caller, for tests and embedders that learn about
/// the system preference some other way.
///
/// # Example
///
/// ```rust
/// use termscheme::{builtin, MemoryStore, PreferenceStore, SimulatedHost, ThemeSwitcher};
///
/// let host = SimulatedHost::new(true);
/// let switcher = ThemeSwitcher::new(builtin::moul(), MemoryStore::new());
/// let _subscription = switcher.initialize(&host).unwrap();
///
/// host.set_prefers_dark(false);
/// let bg = switcher.store().get("background-color").unwrap();
/// assert_eq!(bg.as_color().unwrap().as_str(), "#f9f9f9");
/// ```
#[derive(Debug, Default)]
pub struct SimulatedHost {
    prefers_dark: Cell<Option<bool>>,
    notifications: bool,
    listeners: ListenerSet,
}

impl SimulatedHost {
    /// A host supporting both the query and change notifications.
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Cell::new(Some(prefers_dark)),
            notifications: true,
            listeners: ListenerSet::default(),
        }
    }

    /// A host that supports neither the query nor notifications.
    pub fn unsupported() -> Self {
        Self::default()
    }

    /// A host that answers the query but never reports changes.
    pub fn without_notifications(prefers_dark: bool) -> Self {
        Self {
            notifications: false,
            ..Self::new(prefers_dark)
        }
    }

    /// Changes the preference and notifies listeners if it differs.
    ///
    /// Returns the failures reported by listeners; every listener runs even
    /// when an earlier one fails. On an unsupported host nothing happens.
    pub fn set_prefers_dark(&self, dark: bool) -> Vec<StoreError> {
        match self.prefers_dark.get() {
            None => Vec::new(),
            Some(current) if current == dark => Vec::new(),
            Some(_) => {
                self.prefers_dark.set(Some(dark));
                if self.notifications {
                    self.listeners.dispatch(dark)
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ColorSchemeHost for SimulatedHost {
    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark.get()
    }

    fn subscribe(&self, listener: Listener) -> Option<Subscription> {
        if !self.notifications || self.prefers_dark.get().is_none() {
            return None;
        }
        Some(self.listeners.add(listener))
    }
}
