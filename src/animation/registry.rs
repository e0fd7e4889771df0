use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Something driven by the host's per-frame tick.
pub trait TickListener: Send {
    /// Called once per tick. `partial_tick` is the host's frame fraction.
    fn on_tick(&mut self, partial_tick: f32);
}

/// Identifies one subscription in an [`AnimationRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    listeners: BTreeMap<SubscriptionId, Weak<Mutex<dyn TickListener>>>,
}

/// The host-owned tick driver.
///
/// Listeners are held weakly, so a listener that is dropped without unsubscribing is pruned
/// on the next tick instead of being kept alive. Cloning the registry yields another handle
/// to the same set of subscribers.
#[derive(Clone, Default)]
pub struct AnimationRegistry {
    subscribers: Arc<Mutex<Subscribers>>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: Weak<Mutex<dyn TickListener>>) -> SubscriptionId {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.listeners.insert(id, listener);
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        subscribers.listeners.remove(&id).is_some()
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        let subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        subscribers.listeners.contains_key(&id)
    }

    /// Number of live subscriptions, including ones whose listener was dropped since the last tick.
    pub fn len(&self) -> usize {
        let subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        subscribers.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver one tick to every live listener, in subscription order.
    pub fn tick(&self, partial_tick: f32) {
        // Listeners run without the registry lock held so they may subscribe or unsubscribe.
        let live: Vec<_> = {
            let mut subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
            subscribers.listeners.retain(|_, listener| listener.strong_count() > 0);
            subscribers.listeners.values().filter_map(Weak::upgrade).collect()
        };

        for listener in live {
            listener.lock().unwrap_or_else(PoisonError::into_inner).on_tick(partial_tick);
        }
    }
}

impl std::fmt::Debug for AnimationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationRegistry").field("subscribers", &self.len()).finish()
    }
}
