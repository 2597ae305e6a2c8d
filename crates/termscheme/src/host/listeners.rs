//! Listener registry shared by the host implementations.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::Listener;
use crate::store::StoreError;

type SharedListener = Rc<RefCell<Listener>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, SharedListener)>,
}

/// Ordered set of change listeners.
#[derive(Debug, Clone, Default)]
pub(crate) struct ListenerSet {
    registry: Rc<RefCell<Registry>>,
}

impl ListenerSet {
    pub(crate) fn add(&self, listener: Listener) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry
            .listeners
            .push((id, Rc::new(RefCell::new(listener))));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Calls every listener in registration order and collects failures.
    ///
    /// The registry is not borrowed while listeners run, so a listener may
    /// unsubscribe itself or others. A listener that is already running
    /// (re-entrant dispatch) is skipped.
    pub(crate) fn dispatch(&self, dark: bool) -> Vec<StoreError> {
        let snapshot: Vec<SharedListener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        let mut failures = Vec::new();
        for listener in snapshot {
            let Ok(mut guard) = listener.try_borrow_mut() else {
                continue;
            };
            let callback: &mut Listener = &mut guard;
            if let Err(err) = callback(dark) {
                tracing::warn!(error = %err, "color-scheme listener failed");
                failures.push(err);
            }
        }
        failures
    }
}

/// Token for a registered listener.
///
/// Dropping the token leaves the listener registered for as long as the host
/// lives; call [`Subscription::unsubscribe`] to remove it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Removes the listener. Returns `false` if the host is already gone.
    pub fn unsubscribe(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut registry = registry.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|(id, _)| *id != self.id);
        registry.listeners.len() != before
    }

    pub fn is_active(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let registry = registry.borrow();
        let active = registry.listeners.iter().any(|(id, _)| *id == self.id);
        active
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
