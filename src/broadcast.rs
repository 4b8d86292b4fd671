use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

type Listener = Box<dyn Fn() + Send + Sync>;

/// Handle returned by [`ChangeBroadcaster::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Payload-less "something changed, re-fetch" signal.
///
/// Listeners are invoked synchronously, in the calling thread, after the
/// triggering write has completed. No ordering is guaranteed between
/// listeners; each is expected to re-read idempotently.
pub struct ChangeBroadcaster {
    listeners: RwLock<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

impl ChangeBroadcaster {
    pub fn new() -> Self {
        ChangeBroadcaster {
            listeners: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.push((id, Box::new(listener)));
        }
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.retain(|(listener_id, _)| *listener_id != id.0);
        }
    }

    pub fn notify(&self) {
        if let Ok(listeners) = self.listeners.read() {
            for (_, listener) in listeners.iter() {
                listener();
            }
        }
    }
}

impl Default for ChangeBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
