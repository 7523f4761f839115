//! Single-threaded store with synchronous observer notification.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use super::reducer::Reducer;

type ObserverFn = dyn Fn();

/// Registered observers, in subscription order.
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Rc<ObserverFn>)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// Single-threaded state container.
///
/// Holds the current state, accepts actions via [`dispatch`](Store::dispatch)
/// and notifies observers after every state replacement. The handle is cheap
/// to clone; all clones share the same state slot and observer registry.
/// There is no process-wide instance — callers construct and own stores,
/// one per independent state tree.
///
/// Dispatch is synchronous: the reducer runs and every observer is notified
/// before `dispatch` returns. Observers may themselves dispatch; the nested
/// dispatch completes its own reduce and full notification pass before the
/// outer pass resumes (strict nesting, not queued).
///
/// Not `Send`: intended for single-threaded event-loop use. For dispatch
/// from multiple threads use [`SyncStore`](super::SyncStore).
pub struct Store<R: Reducer> {
    state: Rc<RefCell<R::State>>,
    registry: Rc<RefCell<Registry>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `R::State::default()`.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store holding a caller-supplied initial state.
    pub fn with_state(initial: R::State) -> Self {
        Self {
            state: Rc::new(RefCell::new(initial)),
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Clone of the current state.
    pub fn get_state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Apply a pure projection to the current state without cloning it.
    ///
    /// Selector results are not cached or memoized.
    pub fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        selector(&self.state.borrow())
    }

    /// Compute the next state via the reducer, replace the current state,
    /// then synchronously notify every observer registered at this point,
    /// in subscription order.
    pub fn dispatch(&self, action: R::Action) {
        tracing::trace!(?action, "dispatch");
        {
            let mut slot = self.state.borrow_mut();
            let current = std::mem::take(&mut *slot);
            *slot = R::reduce(current, action);
        }
        self.notify();
    }

    /// Register an observer, invoked with no arguments after every dispatch.
    ///
    /// Observers re-read via [`get_state`](Store::get_state) or
    /// [`select`](Store::select). The same closure may be registered more
    /// than once; each call is a distinct registration.
    ///
    /// The returned [`Subscription`] removes exactly this registration.
    /// Dropping it without calling `unsubscribe` leaves the observer
    /// registered for the lifetime of the store.
    pub fn subscribe(&self, observer: impl Fn() + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, Rc::new(observer)));
        tracing::debug!(observer = id, "subscribed");
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Notify observers from a snapshot taken at dispatch time.
    ///
    /// Observers subscribed during this pass are not called until the next
    /// dispatch; observers unsubscribed during this pass are skipped if not
    /// yet reached. A panicking observer is isolated so the remaining
    /// observers are still notified.
    fn notify(&self) {
        let snapshot: Vec<(u64, Rc<ObserverFn>)> = self.registry.borrow().entries.clone();
        for (id, observer) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            if panic::catch_unwind(AssertUnwindSafe(|| observer())).is_err() {
                tracing::warn!(observer = id, "observer panicked during notification");
            }
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability returned by [`Store::subscribe`].
///
/// Removes exactly the registration it was created for. Calling
/// [`unsubscribe`](Subscription::unsubscribe) more than once is a no-op
/// after the first call.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Remove this registration from the store. Idempotent.
    pub fn unsubscribe(&self) {
        let Some(registry) = self.registry.upgrade() else {
            // Store already dropped, nothing to remove
            return;
        };
        let mut registry = registry.borrow_mut();
        let before = registry.entries.len();
        registry.entries.retain(|(id, _)| *id != self.id);
        if registry.entries.len() < before {
            tracing::debug!(observer = self.id, "unsubscribed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Action, Reducer, State};
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter {
        value: i64,
    }

    impl State for Counter {}

    #[derive(Debug)]
    enum CounterAction {
        Increment,
        Set(i64),
    }

    impl Action for CounterAction {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Action = CounterAction;

        fn reduce(state: Self::State, action: Self::Action) -> Self::State {
            match action {
                CounterAction::Increment => Counter {
                    value: state.value + 1,
                },
                CounterAction::Set(value) => Counter { value },
            }
        }
    }

    #[test]
    fn new_store_holds_default_state() {
        let store = Store::<CounterReducer>::new();
        assert_eq!(store.get_state(), Counter::default());
    }

    #[test]
    fn with_state_holds_initial_state() {
        let store = Store::<CounterReducer>::with_state(Counter { value: 7 });
        assert_eq!(store.get_state().value, 7);
    }

    #[test]
    fn dispatch_replaces_state() {
        let store = Store::<CounterReducer>::new();
        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Increment);
        assert_eq!(store.get_state().value, 2);
    }

    #[test]
    fn select_projects_without_cloning_state() {
        let store = Store::<CounterReducer>::with_state(Counter { value: 3 });
        let doubled = store.select(|state| state.value * 2);
        assert_eq!(doubled, 6);
    }

    #[test]
    fn observer_sees_new_state_during_notification() {
        let store = Store::<CounterReducer>::new();
        let seen = Rc::new(Cell::new(0));

        let observer_store = store.clone();
        let observer_seen = Rc::clone(&seen);
        let _sub = store.subscribe(move || {
            observer_seen.set(observer_store.get_state().value);
        });

        store.dispatch(CounterAction::Set(42));
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn clones_share_state_and_observers() {
        let store = Store::<CounterReducer>::new();
        let handle = store.clone();

        let count = Rc::new(Cell::new(0));
        let observed = Rc::clone(&count);
        let _sub = handle.subscribe(move || observed.set(observed.get() + 1));

        store.dispatch(CounterAction::Increment);
        assert_eq!(handle.get_state().value, 1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unsubscribe_after_store_drop_is_harmless() {
        let store = Store::<CounterReducer>::new();
        let sub = store.subscribe(|| {});
        drop(store);
        sub.unsubscribe();
    }
}
