//! Thread-safe store for concurrent dispatch.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use super::reducer::Reducer;

type SyncObserverFn = dyn Fn() + Send + Sync;

struct SyncRegistry {
    next_id: u64,
    entries: Vec<(u64, Arc<SyncObserverFn>)>,
}

impl SyncRegistry {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// Thread-safe state container.
///
/// Same contract as [`Store`](super::Store), with explicit mutual exclusion
/// around "read state, compute next, replace state, notify" so the whole
/// dispatch runs as one unit even when multiple threads dispatch
/// concurrently. State lives behind a `RwLock` so observers can read it
/// while a notification pass is in flight.
///
/// Unlike [`Store`](super::Store), re-entrant dispatch is not supported:
/// an observer dispatching on the same `SyncStore` deadlocks on the
/// dispatch mutex. Observers here should only read.
pub struct SyncStore<R>
where
    R: Reducer,
    R::State: Sync,
{
    /// Serializes dispatches end to end.
    dispatch_lock: Arc<Mutex<()>>,
    state: Arc<RwLock<R::State>>,
    registry: Arc<Mutex<SyncRegistry>>,
}

impl<R> Clone for SyncStore<R>
where
    R: Reducer,
    R::State: Sync,
{
    fn clone(&self) -> Self {
        Self {
            dispatch_lock: Arc::clone(&self.dispatch_lock),
            state: Arc::clone(&self.state),
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<R> SyncStore<R>
where
    R: Reducer,
    R::State: Sync,
{
    /// Create a store holding `R::State::default()`.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store holding a caller-supplied initial state.
    pub fn with_state(initial: R::State) -> Self {
        Self {
            dispatch_lock: Arc::new(Mutex::new(())),
            state: Arc::new(RwLock::new(initial)),
            registry: Arc::new(Mutex::new(SyncRegistry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Clone of the current state.
    pub fn get_state(&self) -> R::State {
        self.state.read().clone()
    }

    /// Apply a pure projection to the current state without cloning it.
    pub fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        selector(&self.state.read())
    }

    /// Reduce, replace state and notify, serialized against concurrent
    /// dispatches.
    pub fn dispatch(&self, action: R::Action) {
        let _serialized = self.dispatch_lock.lock();
        tracing::trace!(?action, "dispatch");
        {
            let mut slot = self.state.write();
            let current = std::mem::take(&mut *slot);
            *slot = R::reduce(current, action);
        }
        self.notify();
    }

    /// Register an observer. Same semantics as
    /// [`Store::subscribe`](super::Store::subscribe), with `Send + Sync`
    /// bounds so the registry can be shared across threads.
    pub fn subscribe(&self, observer: impl Fn() + Send + Sync + 'static) -> SyncSubscription {
        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, Arc::new(observer)));
        tracing::debug!(observer = id, "subscribed");
        SyncSubscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    fn notify(&self) {
        let snapshot: Vec<(u64, Arc<SyncObserverFn>)> = self.registry.lock().entries.clone();
        for (id, observer) in snapshot {
            if !self.registry.lock().contains(id) {
                continue;
            }
            if panic::catch_unwind(AssertUnwindSafe(|| observer())).is_err() {
                tracing::warn!(observer = id, "observer panicked during notification");
            }
        }
    }
}

impl<R> Default for SyncStore<R>
where
    R: Reducer,
    R::State: Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Capability returned by [`SyncStore::subscribe`]. Idempotent, like
/// [`Subscription`](super::Subscription).
#[derive(Debug)]
pub struct SyncSubscription {
    id: u64,
    registry: Weak<Mutex<SyncRegistry>>,
}

impl SyncSubscription {
    /// Remove this registration from the store. Idempotent.
    pub fn unsubscribe(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.lock();
        let before = registry.entries.len();
        registry.entries.retain(|(id, _)| *id != self.id);
        if registry.entries.len() < before {
            tracing::debug!(observer = self.id, "unsubscribed");
        }
    }
}
