//! Keeps a terminal's theme in step with the system light/dark preference.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use crate::host::{ColorSchemeHost, Subscription};
use crate::scheme::{ColorMode, SchemePair, ThemeConfig};
use crate::store::{write_theme, PreferenceStore, StoreError};

struct SwitcherState<S> {
    schemes: SchemePair,
    store: S,
    current: Option<ColorMode>,
}

/// Applies one member of a [`SchemePair`] to a [`PreferenceStore`] and
/// follows the host's color-scheme changes.
///
/// The switcher is a single-threaded handle; clones share the same state.
/// It is the only writer of the four theme keys in its store.
///
/// # Example
///
/// ```rust
/// use termscheme::{builtin, ColorMode, MemoryStore, PreferenceStore, SimulatedHost, ThemeSwitcher};
///
/// let host = SimulatedHost::new(true);
/// let switcher = ThemeSwitcher::new(builtin::moul(), MemoryStore::new());
///
/// let subscription = switcher.initialize(&host).unwrap();
/// assert_eq!(switcher.current_mode(), Some(ColorMode::Dark));
///
/// switcher.toggle().unwrap();
/// assert_eq!(switcher.current_mode(), Some(ColorMode::Light));
///
/// if let Some(subscription) = subscription {
///     subscription.unsubscribe();
/// }
/// ```
pub struct ThemeSwitcher<S> {
    state: Rc<RefCell<SwitcherState<S>>>,
}

impl<S> Clone for ThemeSwitcher<S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<S: PreferenceStore + 'static> ThemeSwitcher<S> {
    pub fn new(schemes: SchemePair, store: S) -> Self {
        Self {
            state: Rc::new(RefCell::new(SwitcherState {
                schemes,
                store,
                current: None,
            })),
        }
    }

    /// Writes `config` to the store's four theme keys.
    ///
    /// Once every key is written, the tracked mode becomes the pair member
    /// equal to `config`, or unknown when `config` is neither member.
    pub fn apply_theme(&self, config: &ThemeConfig) -> Result<(), StoreError> {
        let mut state = self.state.borrow_mut();
        let SwitcherState {
            schemes,
            store,
            current,
        } = &mut *state;
        write_theme(store, config)?;
        *current = if config == schemes.dark() {
            Some(ColorMode::Dark)
        } else if config == schemes.light() {
            Some(ColorMode::Light)
        } else {
            None
        };
        Ok(())
    }

    /// Applies the pair member for `mode` and records it as current.
    ///
    /// The mode is recorded only once every key was written.
    pub fn apply_mode(&self, mode: ColorMode) -> Result<(), StoreError> {
        let mut state = self.state.borrow_mut();
        let SwitcherState {
            schemes,
            store,
            current,
        } = &mut *state;
        write_theme(store, schemes.get(mode))?;
        *current = Some(mode);
        tracing::debug!(%mode, "applied color scheme");
        Ok(())
    }

    /// Applies dark when the host prefers dark, light otherwise (including
    /// when the host cannot answer).
    pub fn select_and_apply(&self, host: &dyn ColorSchemeHost) -> Result<ColorMode, StoreError> {
        let mode = ColorMode::from_preference(host.prefers_dark());
        self.apply_mode(mode)?;
        Ok(mode)
    }

    /// Applies the preferred scheme now and re-applies on every change.
    ///
    /// Subscribes only when the host supports the query; returns `None` when
    /// no subscription was made. The listener holds a weak reference, so it
    /// stops acting once every handle to this switcher is dropped.
    pub fn initialize(
        &self,
        host: &dyn ColorSchemeHost,
    ) -> Result<Option<Subscription>, StoreError> {
        let prefers_dark = host.prefers_dark();
        let mode = ColorMode::from_preference(prefers_dark);
        self.apply_mode(mode)?;
        tracing::debug!(%mode, "initialized color scheme");

        if prefers_dark.is_none() {
            tracing::debug!("host has no color-scheme query; not subscribing");
            return Ok(None);
        }

        let weak: Weak<RefCell<SwitcherState<S>>> = Rc::downgrade(&self.state);
        let subscription = host.subscribe(Box::new(move |dark| match weak.upgrade() {
            Some(state) => ThemeSwitcher { state }.apply_mode(ColorMode::from_dark(dark)),
            None => Ok(()),
        }));
        if subscription.is_none() {
            tracing::debug!("host does not report color-scheme changes");
        }
        Ok(subscription)
    }

    /// Switches to the other member of the pair.
    ///
    /// Before anything was applied the switcher counts as light, so the first
    /// toggle applies dark.
    pub fn toggle(&self) -> Result<ColorMode, StoreError> {
        let next = self.current_mode().unwrap_or(ColorMode::Light).opposite();
        self.apply_mode(next)?;
        Ok(next)
    }

    /// The mode last applied in full, if any.
    pub fn current_mode(&self) -> Option<ColorMode> {
        self.state.borrow().current
    }

    pub fn schemes(&self) -> Ref<'_, SchemePair> {
        Ref::map(self.state.borrow(), |s| &s.schemes)
    }

    pub fn store(&self) -> Ref<'_, S> {
        Ref::map(self.state.borrow(), |s| &s.store)
    }
}

impl<S> std::fmt::Debug for ThemeSwitcher<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let current = self.state.try_borrow().ok().and_then(|s| s.current);
        f.debug_struct("ThemeSwitcher")
            .field("current", &current)
            .finish_non_exhaustive()
    }
}
