//! Hosts that report the system color-scheme preference.
//!
//! A host answers "is dark mode preferred right now" and may notify
//! listeners when the answer changes. Either capability can be missing:
//!
//! - [`ColorSchemeHost::prefers_dark`] returns `None` when the query is unsupported
//! - [`ColorSchemeHost::subscribe`] returns `None` when changes are not reported
//!
//! Neither case is an error; callers fall back to the light scheme and skip
//! the subscription.

mod listeners;
mod os;
mod simulated;

pub use listeners::Subscription;
pub use os::OsHost;
pub use simulated::SimulatedHost;

pub(crate) use listeners::ListenerSet;

use crate::store::StoreError;

/// Called with the new dark-preference value on every change.
pub type Listener = Box<dyn FnMut(bool) -> Result<(), StoreError>>;

/// Source of the system light/dark preference.
pub trait ColorSchemeHost {
    /// `Some(true)` when dark is preferred, `None` when the host cannot tell.
    fn prefers_dark(&self) -> Option<bool>;

    /// Registers `listener` for preference changes.
    ///
    /// Returns `None` without registering anything when the host does not
    /// report changes.
    fn subscribe(&self, listener: Listener) -> Option<Subscription>;
}
