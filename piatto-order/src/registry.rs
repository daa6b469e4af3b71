use crate::models::Order;
use std::sync::{Arc, Mutex, OnceLock};

/// Notification failure for a single subscriber. Isolated per subscriber:
/// one failing target never stops the rest of a broadcast.
#[derive(Debug, thiserror::Error)]
#[error("Failed to notify {subscriber}: {reason}")]
pub struct NotifyError {
    pub subscriber: String,
    pub reason: String,
}

/// Minimal notification capability. The registry holds shared handles to
/// subscribers; it does not own their lifecycle.
pub trait Subscriber: Send + Sync {
    /// Display name, used in broadcast reports and logs.
    fn name(&self) -> &str;
    fn receive(&self, message: &str) -> Result<(), NotifyError>;
}

/// A customer registered for promotional notifications.
#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

impl Subscriber for Customer {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, message: &str) -> Result<(), NotifyError> {
        tracing::info!(customer = %self.name, phone = %self.phone, "notification: {message}");
        Ok(())
    }
}

/// Outcome of a broadcast: how many targets there were and which ones failed.
#[derive(Debug, Default)]
pub struct BroadcastReport {
    pub attempted: usize,
    pub failures: Vec<NotifyError>,
}

impl BroadcastReport {
    pub fn delivered(&self) -> usize {
        self.attempted - self.failures.len()
    }
}

#[derive(Default)]
struct RegistryState {
    orders: Vec<Order>,
    subscribers: Vec<Arc<dyn Subscriber>>,
}

/// Process-wide store of finalized orders plus the subscriber list for
/// promotional broadcasts. One registry per process via [`OrderRegistry::global`],
/// or construct instances explicitly with [`OrderRegistry::new`] and inject
/// them where needed.
pub struct OrderRegistry {
    state: Mutex<RegistryState>,
}

static GLOBAL: OnceLock<OrderRegistry> = OnceLock::new();

impl OrderRegistry {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RegistryState::default()),
        }
    }

    /// The shared process-wide registry. Lazily constructed exactly once,
    /// even when the first accesses race.
    pub fn global() -> &'static OrderRegistry {
        GLOBAL.get_or_init(OrderRegistry::new)
    }

    /// Register a notification target. Repeated registration is legal and
    /// produces repeated notifications; the registry does not de-duplicate.
    pub fn add_subscriber(&self, subscriber: Arc<dyn Subscriber>) {
        let mut state = self.state.lock().unwrap();
        state.subscribers.push(subscriber);
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.lock().unwrap().subscribers.len()
    }

    /// Deliver `message` to every current subscriber, synchronously, in
    /// registration order. The subscriber list is snapshotted under the lock
    /// and the callbacks run outside it, so a subscriber that re-enters the
    /// registry cannot deadlock the broadcast.
    pub fn notify_all(&self, message: &str) -> BroadcastReport {
        let snapshot: Vec<Arc<dyn Subscriber>> = {
            let state = self.state.lock().unwrap();
            state.subscribers.clone()
        };

        let mut report = BroadcastReport {
            attempted: snapshot.len(),
            failures: Vec::new(),
        };

        for subscriber in snapshot {
            if let Err(err) = subscriber.receive(message) {
                tracing::warn!(subscriber = %subscriber.name(), "notification failed: {}", err.reason);
                report.failures.push(err);
            }
        }

        report
    }

    /// Record a finalized order. Insertion order is preserved.
    pub fn add_order(&self, order: Order) {
        let mut state = self.state.lock().unwrap();
        state.orders.push(order);
    }

    /// All recorded orders, in insertion order.
    pub fn orders(&self) -> Vec<Order> {
        self.state.lock().unwrap().orders.clone()
    }

    pub fn order_count(&self) -> usize {
        self.state.lock().unwrap().orders.len()
    }

    /// Drop all orders and subscribers. Test-isolation hook for code that
    /// goes through the global instance.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.orders.clear();
        state.subscribers.clear();
    }
}

impl Default for OrderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    struct CountingSubscriber {
        name: String,
        received: AtomicUsize,
    }

    impl CountingSubscriber {
        fn new(name: &str) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                received: AtomicUsize::new(0),
            })
        }
    }

    impl Subscriber for CountingSubscriber {
        fn name(&self) -> &str {
            &self.name
        }

        fn receive(&self, _message: &str) -> Result<(), NotifyError> {
            self.received.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingSubscriber;

    impl Subscriber for FailingSubscriber {
        fn name(&self) -> &str {
            "broken"
        }

        fn receive(&self, _message: &str) -> Result<(), NotifyError> {
            Err(NotifyError {
                subscriber: "broken".to_string(),
                reason: "line busy".to_string(),
            })
        }
    }

    #[test]
    fn test_global_returns_same_instance() {
        let a = OrderRegistry::global() as *const OrderRegistry;
        let b = OrderRegistry::global() as *const OrderRegistry;
        assert_eq!(a, b);
    }

    #[test]
    fn test_global_is_single_under_concurrent_first_access() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| OrderRegistry::global() as *const OrderRegistry as usize))
            .collect();

        let pointers: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(pointers.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_notify_reaches_every_subscriber() {
        let registry = OrderRegistry::new();
        let first = CountingSubscriber::new("first");
        let second = CountingSubscriber::new("second");
        registry.add_subscriber(first.clone());
        registry.add_subscriber(second.clone());

        let report = registry.notify_all("50% off today");

        assert_eq!(report.attempted, 2);
        assert_eq!(report.delivered(), 2);
        assert_eq!(first.received.load(Ordering::SeqCst), 1);
        assert_eq!(second.received.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_in_the_middle_does_not_stop_broadcast() {
        let registry = OrderRegistry::new();
        let before = CountingSubscriber::new("before");
        let after = CountingSubscriber::new("after");
        registry.add_subscriber(before.clone());
        registry.add_subscriber(Arc::new(FailingSubscriber));
        registry.add_subscriber(after.clone());

        let report = registry.notify_all("promo");

        assert_eq!(report.attempted, 3);
        assert_eq!(report.delivered(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].subscriber, "broken");
        assert_eq!(after.received.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_repeated_registration_means_repeated_delivery() {
        let registry = OrderRegistry::new();
        let subscriber = CountingSubscriber::new("twice");
        registry.add_subscriber(subscriber.clone());
        registry.add_subscriber(subscriber.clone());

        registry.notify_all("promo");

        assert_eq!(subscriber.received.load(Ordering::SeqCst), 2);
    }

    struct ReentrantSubscriber {
        registry: &'static OrderRegistry,
    }

    impl Subscriber for ReentrantSubscriber {
        fn name(&self) -> &str {
            "reentrant"
        }

        fn receive(&self, _message: &str) -> Result<(), NotifyError> {
            // Re-enters the registry during a broadcast; must not deadlock.
            self.registry.add_subscriber(CountingSubscriber::new("late"));
            Ok(())
        }
    }

    #[test]
    fn test_reentrant_subscriber_does_not_deadlock() {
        let registry: &'static OrderRegistry = Box::leak(Box::new(OrderRegistry::new()));
        registry.add_subscriber(Arc::new(ReentrantSubscriber { registry }));

        let report = registry.notify_all("promo");

        assert_eq!(report.delivered(), 1);
        // The late registration landed, but only after the snapshot.
        assert_eq!(registry.subscriber_count(), 2);
    }

    #[test]
    fn test_orders_keep_insertion_order() {
        let registry = OrderRegistry::new();
        let first = Order::new();
        let second = Order::new();
        let first_id = first.id;
        let second_id = second.id;

        registry.add_order(first);
        registry.add_order(second);

        let ids: Vec<_> = registry.orders().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![first_id, second_id]);
    }

    #[test]
    fn test_clear_resets_state() {
        let registry = OrderRegistry::new();
        registry.add_order(Order::new());
        registry.add_subscriber(CountingSubscriber::new("gone"));

        registry.clear();

        assert_eq!(registry.order_count(), 0);
        assert_eq!(registry.subscriber_count(), 0);
    }
}
