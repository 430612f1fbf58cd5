use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::view::View;

/// Handle returned by [`ViewStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Rc<dyn Fn(View)>;

struct Inner {
    current: View,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Session-scoped holder of the current [`View`].
///
/// Cloning yields another handle to the same state; separately constructed
/// stores are fully isolated. Observers run synchronously inside [`set`],
/// so every observer has seen the new value before `set` returns.
///
/// The store is single-threaded (`!Send`), matching the event-driven UI it
/// serves.
///
/// [`set`]: ViewStore::set
#[derive(Clone)]
pub struct ViewStore {
    inner: Rc<RefCell<Inner>>,
}

impl ViewStore {
    pub fn new(initial: View) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                current: initial,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> View {
        self.inner.borrow().current
    }

    /// Store `view` and notify observers. Returns `false` (and notifies
    /// nobody) when `view` is already current.
    pub fn set(&self, view: View) -> bool {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.current == view {
                return false;
            }
            inner.current = view;
            inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect::<Vec<_>>()
        };

        // Borrow released: observers may read or even set the store.
        for listener in listeners {
            listener(view);
        }
        true
    }

    /// Switch to the other view and return it.
    pub fn toggle(&self) -> View {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    pub fn subscribe(&self, listener: impl Fn(View) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription(id)
    }

    /// Remove an observer. Returns `false` if it was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(id, _)| *id != subscription.0);
        inner.listeners.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Whether both handles point at the same session state.
    pub fn same_store(&self, other: &ViewStore) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new(View::default())
    }
}

impl fmt::Debug for ViewStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ViewStore")
            .field("current", &inner.current)
            .field("observers", &inner.listeners.len())
            .finish()
    }
}

impl PartialEq for ViewStore {
    fn eq(&self, other: &Self) -> bool {
        self.same_store(other)
    }
}
