//! # Change Notifier
//!
//! A zero-payload, synchronous publish/subscribe signal meaning "stored data
//! changed, re-read what you care about".
//!
//! A [`ChangeNotifier`] is a cheap, cloneable handle; clones share one listener
//! list. Construct one per garage and inject it into the store, so separate
//! instances (e.g. in tests) never see each other's signals.
//!
//! ## Delivery
//!
//! [`ChangeNotifier::publish`] calls every listener in subscription order on
//! the caller's stack before returning. The listener list is snapshotted at
//! the start of a publish, so a listener may subscribe, unsubscribe, or
//! publish again from inside its callback: newly added listeners are first
//! called on the next publish, and nested publishes are delivered
//! synchronously (there is no cycle detection).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

#[derive(Clone, Default)]
pub struct ChangeNotifier {
    listeners: Rc<RefCell<Listeners>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; keep the returned [`Subscription`] to remove it later.
    #[must_use = "dropping the Subscription leaves no way to unsubscribe"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn publish(&self) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Subscription {
    /// Remove the listener. A no-op if the notifier is already gone.
    pub fn unsubscribe(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}
