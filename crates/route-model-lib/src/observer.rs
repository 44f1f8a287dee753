//! Change notifications for the route model
//!
//! Observers implement [`RouteObserver`] and are kept in registration order by
//! an [`ObserverRegistry`]. The registry is a cheap shared handle, so an
//! observer can hold a clone of it and (un)register from inside a callback.
//! Dispatch always runs over a snapshot taken when the notification starts.

use crate::RouteModel;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Receives route lifecycle notifications
///
/// Callbacks run after the model has committed its new state, so reading the
/// route from inside a callback always sees consistent values.
pub trait RouteObserver {
    /// A new route was stored
    fn on_update(&self, _route: &RouteModel) {}

    /// The route was cleared
    fn on_reset(&self, _route: &RouteModel) {}

    /// Route computation failed upstream; the stored route is unchanged
    fn on_error(&self, _route: &RouteModel, _message: &str) {}
}

/// Handle returned by [`ObserverRegistry::register`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    observers: Vec<(ObserverId, Rc<dyn RouteObserver>)>,
}

/// Ordered, shared list of observers
#[derive(Clone, Default)]
pub struct ObserverRegistry {
    inner: Rc<RefCell<Registry>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer; it is notified after all earlier registrations
    pub fn register(&self, observer: Rc<dyn RouteObserver>) -> ObserverId {
        let mut registry = self.inner.borrow_mut();
        let id = ObserverId(registry.next_id);
        registry.next_id += 1;
        registry.observers.push((id, observer));
        tracing::trace!("Registered route observer {id:?}");
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unregister(&self, id: ObserverId) -> bool {
        let mut registry = self.inner.borrow_mut();
        let before = registry.observers.len();
        registry.observers.retain(|(other, _)| *other != id);
        before != registry.observers.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Observers in registration order, detached from the registry
    pub(crate) fn snapshot(&self) -> Vec<Rc<dyn RouteObserver>> {
        self.inner
            .borrow()
            .observers
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}
