//! The process-wide order registry and its observer subject.
//!
//! # Architecture Note
//! [`OrderRegistry`] is a cheap cloneable handle over shared state, so the
//! singleton guarantee becomes a property of *which* state a handle points
//! at rather than an implicit global lookup: [`OrderRegistry::global`] hands
//! out handles to the one lazily-initialized process-wide instance, while
//! [`OrderRegistry::new`] builds an independent instance for dependency
//! injection and tests.
//!
//! Append + notify runs under a single lock, so no caller ever observes a
//! partially-notified state and a concurrent retrofit needs no further work.

pub mod error;
pub mod observer;

pub use error::*;
pub use observer::*;

use std::sync::{Arc, Mutex, OnceLock};

use tracing::{debug, warn};

use crate::model::Order;

/// Token identifying a registered observer, used for removal.
pub type ObserverId = u64;

struct RegistryInner {
    orders: Vec<Order>,
    observers: Vec<(ObserverId, Box<dyn OrderObserver>)>,
    next_observer_id: ObserverId,
}

/// Handle to a registry instance. Clones share the same underlying state.
#[derive(Clone)]
pub struct OrderRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

static GLOBAL_REGISTRY: OnceLock<OrderRegistry> = OnceLock::new();

impl OrderRegistry {
    /// Creates an independent registry with no orders and no observers.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                orders: Vec::new(),
                observers: Vec::new(),
                next_observer_id: 1,
            })),
        }
    }

    /// Returns a handle to the process-wide registry, constructing it on
    /// first access. Every call site sees the same order sequence and
    /// observer set; the instance lives for the rest of the process.
    pub fn global() -> Self {
        GLOBAL_REGISTRY.get_or_init(OrderRegistry::new).clone()
    }

    /// Stores an order and synchronously notifies every registered observer
    /// in registration order.
    ///
    /// A failing observer is logged and skipped; the order stays stored and
    /// the remaining observers are still notified.
    pub fn add_order(&self, order: Order) {
        let mut inner = self.inner.lock().unwrap();
        debug!(order_id = order.id, "Storing order");
        inner.orders.push(order.clone());
        for (id, observer) in &inner.observers {
            if let Err(e) = observer.update(&order) {
                warn!(observer_id = *id, error = %e, "Observer failed; skipping");
            }
        }
    }

    /// Registers an observer and returns its removal token. Observers are
    /// notified in the order they were registered.
    pub fn register_observer(&self, observer: Box<dyn OrderObserver>) -> ObserverId {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_observer_id;
        inner.next_observer_id += 1;
        inner.observers.push((id, observer));
        id
    }

    /// Removes the observer with the given token. Returns `false` when no
    /// such observer is registered; removal is otherwise a no-op.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.observers.len();
        inner.observers.retain(|(observer_id, _)| *observer_id != id);
        inner.observers.len() != before
    }

    /// All stored orders, in insertion order.
    pub fn list_orders(&self) -> Vec<Order> {
        self.inner.lock().unwrap().orders.clone()
    }

    /// Number of stored orders.
    pub fn order_count(&self) -> usize {
        self.inner.lock().unwrap().orders.len()
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.lock().unwrap().observers.len()
    }
}

impl Default for OrderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
