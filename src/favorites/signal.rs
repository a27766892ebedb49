//! Payload-less change notification.
//!
//! The signal is a pure invalidation pulse: it never carries the new
//! value. Subscribers must re-read the store when notified, which keeps
//! them consistent even if deliveries are coalesced or reordered.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Listener = Box<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener)>>,
}

/// Broadcast channel with any number of listeners. Cheap to clone;
/// clones share one listener registry.
#[derive(Clone, Default)]
pub struct ChangeSignal {
    registry: Arc<Registry>,
}

impl ChangeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener. It stays attached for the lifetime of the
    /// returned guard; dropping the guard detaches it, so every
    /// subscription has a matching unsubscription on every exit path.
    ///
    /// A listener attached after an emit does not see that emit.
    /// Listeners must not subscribe or unsubscribe from inside the
    /// callback; the registry lock is held during delivery.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.listeners.lock().push((id, Box::new(listener)));
        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Notify every current listener, in subscription order.
    pub fn emit(&self) {
        let listeners = self.registry.listeners.lock();
        for (_, listener) in listeners.iter() {
            listener();
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.registry.listeners.lock().len()
    }
}

/// Guard for one attached listener; detaches on drop.
pub struct Subscription {
    registry: Weak<Registry>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.listeners.lock().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting(signal: &ChangeSignal) -> (Arc<AtomicUsize>, Subscription) {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_in = Arc::clone(&hits);
        let sub = signal.subscribe(move || {
            hits_in.fetch_add(1, Ordering::SeqCst);
        });
        (hits, sub)
    }

    #[test]
    fn emit_reaches_every_listener() {
        let signal = ChangeSignal::new();
        let (first, _a) = counting(&signal);
        let (second, _b) = counting(&signal);

        signal.emit();
        signal.emit();

        assert_eq!(first.load(Ordering::SeqCst), 2);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_subscription_detaches_listener() {
        let signal = ChangeSignal::new();
        let (hits, sub) = counting(&signal);

        signal.emit();
        drop(sub);
        signal.emit();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn late_subscriber_misses_earlier_emits() {
        let signal = ChangeSignal::new();
        signal.emit();

        let (hits, _sub) = counting(&signal);
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        signal.emit();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clones_share_one_registry() {
        let signal = ChangeSignal::new();
        let clone = signal.clone();
        let (hits, _sub) = counting(&signal);

        clone.emit();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
