//! # Trophy Watcher
//!
//! Bridges the change notifier to the trophy engine: attaching and every
//! published change trigger [`TrophyEngine::check_for_new_unlock`](crate::trophies::TrophyEngine::check_for_new_unlock),
//! and a newly unlocked trophy becomes the pending toast.
//!
//! Two guards keep checks from piling up:
//! - **checking**: a check already in flight swallows nested triggers.
//! - **toast showing**: while a toast is pending, triggers are ignored. Unlocks
//!   earned meanwhile are picked up by the first check after the toast is
//!   dismissed.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::notifier::Subscription;
use crate::store::backend::StorageBackend;
use crate::store::garage_store::GarageStore;
use crate::trophies::TrophyDefinition;

#[derive(Debug, Default)]
struct WatchState {
    checking: bool,
    toast: Option<TrophyDefinition>,
}

pub struct TrophyWatcher<B: StorageBackend + 'static> {
    store: Rc<GarageStore<B>>,
    state: Rc<RefCell<WatchState>>,
    subscription: Option<Subscription>,
}

impl<B: StorageBackend + 'static> TrophyWatcher<B> {
    /// Subscribe to the store's notifier, then check once so trophies
    /// already earned by stored data are announced.
    pub fn attach(store: Rc<GarageStore<B>>) -> Self {
        let state = Rc::new(RefCell::new(WatchState::default()));

        // The listener holds the store weakly so the subscription does not
        // keep the store (and its notifier) alive.
        let weak_store = Rc::downgrade(&store);
        let listener_state = Rc::clone(&state);
        let subscription = store.notifier().subscribe(move || {
            if let Some(store) = weak_store.upgrade() {
                run_check(&store, &listener_state);
            }
        });

        run_check(&store, &state);

        Self {
            store,
            state,
            subscription: Some(subscription),
        }
    }

    /// Run a check now, subject to the same guards as a notification.
    pub fn check_now(&self) {
        run_check(&self.store, &self.state);
    }

    pub fn current_toast(&self) -> Option<TrophyDefinition> {
        self.state.borrow().toast.clone()
    }

    /// Clear the pending toast, returning it.
    pub fn dismiss_toast(&self) -> Option<TrophyDefinition> {
        self.state.borrow_mut().toast.take()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stop reacting to notifications.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl<B: StorageBackend + 'static> Drop for TrophyWatcher<B> {
    fn drop(&mut self) {
        self.detach();
    }
}

fn run_check<B: StorageBackend>(store: &GarageStore<B>, state: &RefCell<WatchState>) {
    {
        let mut guard = state.borrow_mut();
        if guard.checking || guard.toast.is_some() {
            return;
        }
        guard.checking = true;
    }

    let outcome = store.trophies().check_for_new_unlock();

    let mut guard = state.borrow_mut();
    guard.checking = false;
    match outcome {
        Ok(Some(trophy)) => guard.toast = Some(trophy),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "trophy check failed"),
    }
}
